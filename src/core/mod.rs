//! Core infrastructure: error handling and endpoint configuration.

mod endpoints;
mod error;

pub use endpoints::{Endpoint, PAYEER_TRADE_API_BASE};
pub use error::{Error, ErrorKind, PayeerError, Result};
