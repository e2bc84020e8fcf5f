//! # Payeer SDK
//!
//! A Rust client for the [Payeer](https://payeer.com) trade REST API.
//!
//! ## Features
//!
//! - **Market Data** - Server time, pair limits, tickers, order books, trades
//! - **Order Management** - Create, query and cancel orders
//! - **Account** - Balances, open orders, order and trade history
//! - **Authentication** - HMAC-SHA256 request signing
//!
//! Responses are returned as [`serde_json::Value`] exactly as the exchange
//! sent them; every failure is a [`PayeerError`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use payeer_sdk::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Market data (no auth required)
//!     let client = TradeClient::new(TradeConfig::default())?;
//!     let ticker = client.ticker(&["BTC_USD"]).await?;
//!     println!("{ticker}");
//!
//!     // Account data (signed)
//!     let user = Credential::new("api-id", "secret");
//!     let balances = client.account(&user).await?;
//!     println!("{balances}");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`core`] - Error handling and endpoint catalogue
//! - [`types`] - Request parameter types (Side, OrderType, NewOrder, ...)
//! - [`auth`] - Credentials and request signing
//! - [`client`] - REST API client

#![cfg_attr(docsrs, feature(doc_cfg))]

// Core infrastructure
pub mod core;

// Type definitions
pub mod types;

// Authentication
#[cfg(feature = "auth")]
#[cfg_attr(docsrs, doc(cfg(feature = "auth")))]
pub mod auth;

// API client
#[cfg(feature = "client")]
#[cfg_attr(docsrs, doc(cfg(feature = "client")))]
pub mod client;

// Prelude for convenient imports
pub mod prelude;

// ============================================================================
// Core Re-exports (always available)
// ============================================================================

pub use crate::core::{Endpoint, Error, ErrorKind, PayeerError, Result, PAYEER_TRADE_API_BASE};

// ============================================================================
// Type Re-exports (always available)
// ============================================================================

pub use types::{join_pairs, NewOrder, OrderFilter, OrderType, Params, Side};

// ============================================================================
// Auth Re-exports
// ============================================================================

#[cfg(feature = "auth")]
pub use auth::{
    current_timestamp_millis, sign_request, Credential, HmacSha256, API_ID_HEADER,
    API_SIGN_HEADER,
};

// ============================================================================
// Client Re-exports
// ============================================================================

#[cfg(feature = "client")]
pub use client::{HttpMethod, TradeClient, TradeConfig};
