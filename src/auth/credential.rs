use std::fmt;

/// API identifier and secret key used to sign authenticated requests.
///
/// Owned by the caller and passed by reference into each authenticated call;
/// the client never stores it.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    api_id: String,
    secret: String,
}

impl Credential {
    /// Create a credential. Neither field is validated.
    #[must_use]
    pub fn new(api_id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            api_id: api_id.into(),
            secret: secret.into(),
        }
    }

    #[must_use]
    pub fn api_id(&self) -> &str {
        &self.api_id
    }

    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("api_id", &self.api_id)
            .field("secret", &"<redacted>")
            .finish()
    }
}
