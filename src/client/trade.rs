//! Payeer trade REST API client
//!
//! Public endpoints (`time`, `info`, `ticker`, `orders`, `trades`) need no
//! credentials. Account and order endpoints take a [`Credential`] and are
//! signed with HMAC-SHA256.
//!
//! ## Example
//!
//! ```rust,ignore
//! use payeer_sdk::prelude::*;
//!
//! let client = TradeClient::new(TradeConfig::default())?;
//! let ticker = client.ticker(&["BTC_USD"]).await?;
//!
//! let user = Credential::new("api-id", "secret");
//! let order = NewOrder::limit("BTC_USD", Side::Buy, "0.001", "50000");
//! let created = client.order_create(order.into(), &user).await?;
//! ```

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, instrument, warn};
use url::Url;

use super::request::{decode_response, encode_params, query_pairs, HttpMethod, Placement};
use crate::auth::{
    current_timestamp_millis, sign_request, Credential, API_ID_HEADER, API_SIGN_HEADER,
};
use crate::core::{Endpoint, PayeerError, Result, PAYEER_TRADE_API_BASE};
use crate::types::{join_pairs, Params};

/// Trade API configuration
#[derive(Debug, Clone)]
pub struct TradeConfig {
    /// Trade API base URL
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for TradeConfig {
    fn default() -> Self {
        Self {
            base_url: PAYEER_TRADE_API_BASE.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("payeer-sdk/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl TradeConfig {
    /// Create a new configuration builder with defaults.
    #[must_use]
    pub fn builder() -> Self {
        Self::default()
    }

    /// Set base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set user agent string
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Payeer trade API client
///
/// Holds only configuration and a pooled HTTP client; cheap to clone and safe
/// to share between tasks.
#[derive(Debug, Clone)]
pub struct TradeClient {
    config: TradeConfig,
    base_url: Url,
    client: Client,
}

impl TradeClient {
    /// Create a new trade client
    pub fn new(config: TradeConfig) -> Result<Self> {
        let base_url = parse_base_url(&config.base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| PayeerError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            config,
            base_url,
            client,
        })
    }

    /// Create a client with default settings against another base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::new(TradeConfig::default().with_base_url(base_url))
    }

    #[must_use]
    pub fn config(&self) -> &TradeConfig {
        &self.config
    }

    /// Normalized base URL (always ends with `/`).
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build, sign, dispatch and decode one request.
    ///
    /// Params are serialized once; that exact text is signed and, for POST,
    /// sent as the body. GET requests are signed over the same JSON text even
    /// though their params travel in the query string.
    #[instrument(skip(self, params, user), fields(signed = user.is_some()))]
    async fn request(
        &self,
        method: HttpMethod,
        endpoint: Endpoint,
        params: Params,
        user: Option<&Credential>,
    ) -> Result<Value> {
        debug_assert_eq!(
            endpoint.requires_auth(),
            user.is_some(),
            "{endpoint} signing mismatch"
        );

        let path = endpoint.path();
        let url = self.base_url.join(path)?;
        let payload = encode_params(&params)?;

        let mut req_builder = self.client.request(method.into(), url);

        if let Some(user) = user {
            let signature = sign_request(user.secret(), path, &payload)?;
            req_builder = req_builder
                .header(API_ID_HEADER, user.api_id())
                .header(API_SIGN_HEADER, signature);
        }

        req_builder = match method.placement() {
            Placement::Body => req_builder.body(payload),
            Placement::Query => req_builder.query(&query_pairs(&params)),
        };

        debug!(%method, %endpoint, "Dispatching request");

        let response = req_builder.send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!(%endpoint, status = status.as_u16(), "Unexpected response status");
            return Err(PayeerError::status(status.as_u16(), body));
        }

        let body = response.bytes().await?;
        let result = decode_response(&body).inspect_err(|e| {
            warn!(%endpoint, error = %e, "Malformed response body");
        })?;

        debug!(%endpoint, "Request succeeded");

        Ok(result)
    }

    // ------------------------------------------------------------------
    // Public endpoints
    // ------------------------------------------------------------------

    /// Connection test; returns the server time.
    #[instrument(skip(self))]
    pub async fn time(&self) -> Result<Value> {
        self.request(HttpMethod::Get, Endpoint::Time, Params::new(), None)
            .await
    }

    /// Pairs and limits. No pairs means all pairs (GET); otherwise POST.
    #[instrument(skip(self))]
    pub async fn info(&self, pairs: &[&str]) -> Result<Value> {
        let (method, params) = pair_query(pairs);
        self.request(method, Endpoint::Info, params, None).await
    }

    /// Price statistics. No pairs means all pairs (GET); otherwise POST.
    #[instrument(skip(self))]
    pub async fn ticker(&self, pairs: &[&str]) -> Result<Value> {
        let (method, params) = pair_query(pairs);
        self.request(method, Endpoint::Ticker, params, None).await
    }

    /// Order book for the given pairs.
    #[instrument(skip(self))]
    pub async fn orders(&self, pairs: &[&str]) -> Result<Value> {
        self.request(HttpMethod::Post, Endpoint::Orders, pair_param(pairs), None)
            .await
    }

    /// Recent trades for the given pairs.
    #[instrument(skip(self))]
    pub async fn trades(&self, pairs: &[&str]) -> Result<Value> {
        self.request(HttpMethod::Post, Endpoint::Trades, pair_param(pairs), None)
            .await
    }

    // ------------------------------------------------------------------
    // Authenticated endpoints
    // ------------------------------------------------------------------

    /// Account balances.
    #[instrument(skip(self, user))]
    pub async fn account(&self, user: &Credential) -> Result<Value> {
        self.signed(Endpoint::Account, Params::new(), user).await
    }

    /// Create an order. `params` can be built from a
    /// [`NewOrder`](crate::types::NewOrder).
    #[instrument(skip(self, params, user))]
    pub async fn order_create(&self, params: Params, user: &Credential) -> Result<Value> {
        self.signed(Endpoint::OrderCreate, params, user).await
    }

    /// Status of one order.
    #[instrument(skip(self, user))]
    pub async fn order_status(&self, order_id: u64, user: &Credential) -> Result<Value> {
        self.signed(Endpoint::OrderStatus, order_id_param(order_id), user)
            .await
    }

    /// Cancel one order.
    #[instrument(skip(self, user))]
    pub async fn order_cancel(&self, order_id: u64, user: &Credential) -> Result<Value> {
        self.signed(Endpoint::OrderCancel, order_id_param(order_id), user)
            .await
    }

    /// Cancel every order matching `params` (see
    /// [`OrderFilter`](crate::types::OrderFilter)).
    ///
    /// Goes to the same endpoint as [`order_cancel`](Self::order_cancel).
    #[instrument(skip(self, params, user))]
    pub async fn orders_cancel(&self, params: Params, user: &Credential) -> Result<Value> {
        self.signed(Endpoint::OrderCancel, params, user).await
    }

    /// Open orders of the account.
    ///
    /// `pair` is sent only when `pairs` is non-empty and `action` only when
    /// given and non-empty.
    #[instrument(skip(self, user))]
    pub async fn orders_my(
        &self,
        user: &Credential,
        pairs: &[&str],
        action: Option<&str>,
    ) -> Result<Value> {
        let mut params = Params::new();
        params.insert("ts".into(), Value::from(current_timestamp_millis()));
        if !pairs.is_empty() {
            params.insert("pair".into(), Value::String(join_pairs(pairs)));
        }
        if let Some(action) = action.filter(|a| !a.is_empty()) {
            params.insert("action".into(), Value::from(action));
        }
        self.request(HttpMethod::Post, Endpoint::MyOrders, params, Some(user))
            .await
    }

    /// Order history of the account.
    #[instrument(skip(self, user, params))]
    pub async fn history_my(&self, user: &Credential, params: Params) -> Result<Value> {
        self.signed(Endpoint::MyHistory, params, user).await
    }

    /// Trade history of the account.
    #[instrument(skip(self, user, params))]
    pub async fn trades_my(&self, user: &Credential, params: Params) -> Result<Value> {
        self.signed(Endpoint::MyTrades, params, user).await
    }

    /// POST to an authenticated endpoint with a fresh `ts` merged into params.
    async fn signed(&self, endpoint: Endpoint, params: Params, user: &Credential) -> Result<Value> {
        self.request(HttpMethod::Post, endpoint, with_timestamp(params), Some(user))
            .await
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)?;
    if url.cannot_be_a_base() {
        return Err(PayeerError::config(format!("Base URL cannot be a base: {raw}")));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// `info`/`ticker` shaping: `pair` is always present, GET only when empty.
fn pair_query(pairs: &[&str]) -> (HttpMethod, Params) {
    let method = if pairs.is_empty() {
        HttpMethod::Get
    } else {
        HttpMethod::Post
    };
    (method, pair_param(pairs))
}

fn pair_param(pairs: &[&str]) -> Params {
    let mut params = Params::new();
    params.insert("pair".into(), Value::String(join_pairs(pairs)));
    params
}

fn order_id_param(order_id: u64) -> Params {
    let mut params = Params::new();
    params.insert("order_id".into(), Value::from(order_id));
    params
}

// An existing `ts` key is overwritten in place.
fn with_timestamp(mut params: Params) -> Params {
    params.insert("ts".into(), Value::from(current_timestamp_millis()));
    params
}
