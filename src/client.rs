//! REST API client for the Payeer trade API.
//!
//! - [`TradeClient`] - public market data and authenticated trading endpoints

mod request;
mod trade;

pub use request::HttpMethod;
pub use trade::{TradeClient, TradeConfig};
