//! Error types for the Payeer SDK.
//!
//! Every endpoint call fails with exactly one of three kinds: a transport
//! fault, a non-200 status, or a malformed response body.

use thiserror::Error;

/// Main error type for the Payeer SDK.
#[derive(Error, Debug)]
pub enum PayeerError {
    /// Transport-level fault before a status code was obtained
    /// (DNS, refused connection, timeout, TLS, body read).
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        code: Option<u16>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The API answered with a status other than 200.
    #[error("API connection status: {status}")]
    Status { status: u16, body: String },

    /// Status 200 but the body is not a JSON object or array.
    #[error("Malformed response: {message}")]
    MalformedResponse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Client construction errors
    #[error("Config error: {message}")]
    Config { message: String },
}

/// Discriminant of a [`PayeerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// `TransportError`
    Transport,
    /// `TransportStatusError`
    Status,
    /// `MalformedResponseError`
    MalformedResponse,
    /// Construction-time configuration error
    Config,
}

impl PayeerError {
    /// Which kind of failure this is.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Status { .. } => ErrorKind::Status,
            Self::MalformedResponse { .. } => ErrorKind::MalformedResponse,
            Self::Config { .. } => ErrorKind::Config,
        }
    }

    /// Numeric code, where one is available.
    ///
    /// For [`PayeerError::Status`] this is the HTTP status.
    #[must_use]
    pub fn code(&self) -> Option<u16> {
        match self {
            Self::Transport { code, .. } => *code,
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get error category for logs.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "transport",
            Self::Status { .. } => "status",
            Self::MalformedResponse { .. } => "malformed_response",
            Self::Config { .. } => "config",
        }
    }
}

// Convenience constructors
impl PayeerError {
    /// Create a transport error without source.
    pub fn transport(message: impl Into<String>, code: Option<u16>) -> Self {
        Self::Transport {
            message: message.into(),
            code,
            source: None,
        }
    }

    /// Create a transport error with source.
    pub fn transport_with_source<E: std::error::Error + Send + Sync + 'static>(
        message: impl Into<String>,
        code: Option<u16>,
        source: E,
    ) -> Self {
        Self::Transport {
            message: message.into(),
            code,
            source: Some(Box::new(source)),
        }
    }

    /// Create a status error.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Create a malformed response error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
            source: None,
        }
    }

    /// Create a malformed response error with source.
    pub fn malformed_with_source<E: std::error::Error + Send + Sync + 'static>(
        message: impl Into<String>,
        source: E,
    ) -> Self {
        Self::MalformedResponse {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

// Every reqwest fault is a transport error; reqwest types stop here.
#[cfg(feature = "client")]
impl From<reqwest::Error> for PayeerError {
    fn from(err: reqwest::Error) -> Self {
        let code = err.status().map(|s| s.as_u16());
        let message = if err.is_timeout() {
            format!("request timed out: {err}")
        } else if err.is_connect() {
            format!("connection failed: {err}")
        } else {
            err.to_string()
        };
        Self::transport_with_source(message, code, err)
    }
}

impl From<serde_json::Error> for PayeerError {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed_with_source(format!("JSON parsing failed: {err}"), err)
    }
}

#[cfg(feature = "client")]
impl From<url::ParseError> for PayeerError {
    fn from(err: url::ParseError) -> Self {
        Self::config(format!("Invalid URL: {err}"))
    }
}

// Manual Clone implementation since Box<dyn Error> doesn't implement Clone
impl Clone for PayeerError {
    fn clone(&self) -> Self {
        match self {
            Self::Transport { message, code, .. } => Self::Transport {
                message: message.clone(),
                code: *code,
                source: None,
            },
            Self::Status { status, body } => Self::Status {
                status: *status,
                body: body.clone(),
            },
            Self::MalformedResponse { message, .. } => Self::MalformedResponse {
                message: message.clone(),
                source: None,
            },
            Self::Config { message } => Self::Config {
                message: message.clone(),
            },
        }
    }
}

/// Result type alias for convenience.
pub type Result<T> = std::result::Result<T, PayeerError>;

/// Alias for backward compatibility.
pub type Error = PayeerError;
