//! Axum extractors for authentication.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use catalog_core::auth::{bearer_token, verify_token, AuthError, Claims};

use super::AuthConfig;
use crate::handlers::AppError;

/// Extractor for the caller of an API route. Returns 401 unless the request
/// carries `Authorization: Bearer <token>` with a token signed by the
/// configured secret.
pub struct AuthenticatedUser(pub Claims);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    AuthConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = AuthConfig::from_ref(state);

        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(bearer_token)
            .ok_or(AuthError::MissingToken)?;

        let claims = verify_token(token, &config.secret)?;

        Ok(AuthenticatedUser(claims))
    }
}
