//! Authentication and signing utilities for the Payeer trade API.
//!
//! Authenticated endpoints carry two headers:
//!
//! | Header | Value |
//! |--------|-------|
//! | `API-ID` | The credential's API identifier |
//! | `API-SIGN` | `hex(HMAC-SHA256(secret, path + json_params))` |
//!
//! The signed payload is always the JSON form of the parameters, even for
//! requests that put their parameters in the query string.

mod credential;
mod signer;

pub use credential::Credential;
pub use signer::{
    current_timestamp_millis, sign_request, HmacSha256, API_ID_HEADER, API_SIGN_HEADER,
};
