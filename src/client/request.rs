//! Request encoding and response decoding shared by every endpoint.

use std::fmt;

use serde_json::Value;

use crate::core::{PayeerError, Result};
use crate::types::Params;

/// HTTP verb used by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Where request parameters travel on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    Query,
    Body,
}

impl HttpMethod {
    pub(crate) const fn placement(self) -> Placement {
        match self {
            Self::Get => Placement::Query,
            Self::Post => Placement::Body,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

/// Serialize params to the JSON text that is both signed and sent as body.
pub(crate) fn encode_params(params: &Params) -> Result<String> {
    serde_json::to_string(params).map_err(|e| {
        PayeerError::transport_with_source("Failed to encode request parameters", None, e)
    })
}

/// Flatten params into query-string pairs.
///
/// Strings go out verbatim, `null` as an empty value, everything else as
/// compact JSON text.
pub(crate) fn query_pairs(params: &Params) -> Vec<(String, String)> {
    params
        .iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            };
            (key.clone(), value)
        })
        .collect()
}

/// Decode a 200 response body. Only JSON objects and arrays are accepted.
/// Bytes are decoded strictly; invalid UTF-8 is malformed, never replaced.
pub(crate) fn decode_response(body: &[u8]) -> Result<Value> {
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        PayeerError::malformed_with_source(format!("Response is not JSON content: {e}"), e)
    })?;

    match value {
        Value::Object(_) | Value::Array(_) => Ok(value),
        other => Err(PayeerError::malformed(format!(
            "Expected a JSON object or array, got {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
