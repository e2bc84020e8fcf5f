//! Commonly used types for quick imports.
//!
//! # Example
//!
//! ```rust,ignore
//! use payeer_sdk::prelude::*;
//!
//! let client = TradeClient::new(TradeConfig::default())?;
//! let user = Credential::new("api-id", "secret");
//! ```

// Core
pub use crate::core::{Error, ErrorKind, PayeerError, Result};

// Common types
pub use crate::types::{NewOrder, OrderFilter, OrderType, Params, Side};

// Auth (if enabled)
#[cfg(feature = "auth")]
pub use crate::auth::Credential;

// Client (if enabled)
#[cfg(feature = "client")]
pub use crate::client::{TradeClient, TradeConfig};
