//! Endpoint catalogue for the Payeer trade API.

use std::fmt;

/// Default trade API root. Endpoint paths are resolved relative to it.
pub const PAYEER_TRADE_API_BASE: &str = "https://payeer.com/api/trade/";

/// A named remote operation reachable at `base_url + path`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Time,
    Info,
    Ticker,
    Orders,
    Trades,
    Account,
    OrderCreate,
    OrderStatus,
    /// Cancels one order by id, or several by filter.
    OrderCancel,
    MyOrders,
    MyHistory,
    MyTrades,
}

impl Endpoint {
    /// Path relative to the base URL, without a leading slash.
    ///
    /// This is also the prefix of the signed payload.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Info => "info",
            Self::Ticker => "ticker",
            Self::Orders => "orders",
            Self::Trades => "trades",
            Self::Account => "account",
            Self::OrderCreate => "order_create",
            Self::OrderStatus => "order_status",
            Self::OrderCancel => "order_cancel",
            Self::MyOrders => "my_orders",
            Self::MyHistory => "my_history",
            Self::MyTrades => "my_trades",
        }
    }

    /// Whether the endpoint needs `API-ID`/`API-SIGN` headers.
    #[must_use]
    pub const fn requires_auth(self) -> bool {
        matches!(
            self,
            Self::Account
                | Self::OrderCreate
                | Self::OrderStatus
                | Self::OrderCancel
                | Self::MyOrders
                | Self::MyHistory
                | Self::MyTrades
        )
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
