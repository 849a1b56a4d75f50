//! Bearer-token authentication for the API routes.

mod extractors;

pub use extractors::AuthenticatedUser;

/// Settings used to verify bearer tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// HS256 signing secret.
    pub secret: String,
}

impl AuthConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}
