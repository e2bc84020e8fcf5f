//! Common request types.
//!
//! Responses are passed through as [`serde_json::Value`]; only request
//! parameters get typed helpers here.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered request parameters.
///
/// Key order is insertion order, which is also the order of the signed JSON
/// payload and the request body.
pub type Params = serde_json::Map<String, Value>;

/// Join trading pairs into the comma-separated `pair` parameter.
#[must_use]
pub fn join_pairs(pairs: &[&str]) -> String {
    pairs.join(",")
}

/// Order side (the `action` parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order type (the `type` parameter of `order_create`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    Limit,
    Market,
    StopLimit,
}

impl OrderType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Limit => "limit",
            Self::Market => "market",
            Self::StopLimit => "stop_limit",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for `order_create`.
///
/// Decimal quantities are kept as strings so they reach the exchange exactly
/// as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub pair: String,
    pub order_type: OrderType,
    pub side: Side,
    pub amount: Option<String>,
    pub price: Option<String>,
    /// Quote-currency value, for market orders sized by spend.
    pub value: Option<String>,
    pub stop_price: Option<String>,
}

impl NewOrder {
    /// Limit order for `amount` at `price`.
    #[must_use]
    pub fn limit(
        pair: impl Into<String>,
        side: Side,
        amount: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            pair: pair.into(),
            order_type: OrderType::Limit,
            side,
            amount: Some(amount.into()),
            price: Some(price.into()),
            value: None,
            stop_price: None,
        }
    }

    /// Market order sized by base-currency amount.
    #[must_use]
    pub fn market(pair: impl Into<String>, side: Side, amount: impl Into<String>) -> Self {
        Self {
            pair: pair.into(),
            order_type: OrderType::Market,
            side,
            amount: Some(amount.into()),
            price: None,
            value: None,
            stop_price: None,
        }
    }

    /// Market order sized by quote-currency value.
    #[must_use]
    pub fn market_value(pair: impl Into<String>, side: Side, value: impl Into<String>) -> Self {
        Self {
            pair: pair.into(),
            order_type: OrderType::Market,
            side,
            amount: None,
            price: None,
            value: Some(value.into()),
            stop_price: None,
        }
    }

    /// Stop-limit order: a limit order placed once `stop_price` is reached.
    #[must_use]
    pub fn stop_limit(
        pair: impl Into<String>,
        side: Side,
        amount: impl Into<String>,
        price: impl Into<String>,
        stop_price: impl Into<String>,
    ) -> Self {
        Self {
            pair: pair.into(),
            order_type: OrderType::StopLimit,
            side,
            amount: Some(amount.into()),
            price: Some(price.into()),
            value: None,
            stop_price: Some(stop_price.into()),
        }
    }
}

impl From<NewOrder> for Params {
    fn from(order: NewOrder) -> Self {
        let mut params = Params::new();
        params.insert("pair".into(), Value::String(order.pair));
        params.insert("type".into(), Value::from(order.order_type.as_str()));
        params.insert("action".into(), Value::from(order.side.as_str()));
        insert_opt(&mut params, "amount", order.amount);
        insert_opt(&mut params, "price", order.price);
        insert_opt(&mut params, "value", order.value);
        insert_opt(&mut params, "stop_price", order.stop_price);
        params
    }
}

/// Filter for `orders_cancel`, `history_my` and `trades_my`.
///
/// Unset fields are omitted from the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub pair: Option<String>,
    pub side: Option<Side>,
    /// Order status, e.g. `success`, `processing`, `waiting`, `canceled`.
    pub status: Option<String>,
    /// Unix seconds.
    pub date_from: Option<u64>,
    /// Unix seconds.
    pub date_to: Option<u64>,
    /// Id of the last record of the previous page.
    pub append: Option<u64>,
    pub limit: Option<u32>,
}

impl OrderFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_pairs(mut self, pairs: &[&str]) -> Self {
        self.pair = Some(join_pairs(pairs));
        self
    }

    #[must_use]
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn with_date_range(mut self, from: u64, to: u64) -> Self {
        self.date_from = Some(from);
        self.date_to = Some(to);
        self
    }

    #[must_use]
    pub fn with_append(mut self, append: u64) -> Self {
        self.append = Some(append);
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl From<OrderFilter> for Params {
    fn from(filter: OrderFilter) -> Self {
        let mut params = Params::new();
        insert_opt(&mut params, "pair", filter.pair);
        insert_opt(&mut params, "action", filter.side.map(Side::as_str));
        insert_opt(&mut params, "status", filter.status);
        insert_opt(&mut params, "date_from", filter.date_from);
        insert_opt(&mut params, "date_to", filter.date_to);
        insert_opt(&mut params, "append", filter.append);
        insert_opt(&mut params, "limit", filter.limit);
        params
    }
}

fn insert_opt<T: Into<Value>>(params: &mut Params, key: &str, value: Option<T>) {
    if let Some(value) = value {
        params.insert(key.to_string(), value.into());
    }
}
