//! HMAC-SHA256 request signing.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::core::{PayeerError, Result};

/// HMAC-SHA256 type alias.
pub type HmacSha256 = Hmac<Sha256>;

/// Header carrying the credential's API identifier.
pub const API_ID_HEADER: &str = "API-ID";

/// Header carrying the request signature.
pub const API_SIGN_HEADER: &str = "API-SIGN";

/// Sign a request for an authenticated endpoint.
///
/// `path` is the endpoint path relative to the base URL (e.g. `order_create`)
/// and `json_params` the exact serialized parameters. Returns the lowercase
/// hex digest of `HMAC-SHA256(secret, path + json_params)`.
///
/// # Errors
///
/// Returns an error if HMAC initialization fails.
pub fn sign_request(secret: &str, path: &str, json_params: &str) -> Result<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| PayeerError::config(format!("HMAC initialization failed: {e}")))?;

    mac.update(path.as_bytes());
    mac.update(json_params.as_bytes());

    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Current time in milliseconds since the Unix epoch.
///
/// Read fresh on every call; used as the `ts` parameter.
#[must_use]
pub fn current_timestamp_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
