use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use super::{AuthError, Claims};

/// Extract the token from an `Authorization` header value.
///
/// Returns `None` unless the value is `Bearer <token>` with a non-empty token.
pub fn bearer_token(header_value: &str) -> Option<&str> {
    header_value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Verify an HS256 token signed with `secret` and return its claims.
///
/// `exp` is optional; when present it must lie in the future.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| AuthError::InvalidToken(e.to_string()))
}

/// Sign `claims` with `secret` using HS256.
pub fn issue_token(claims: &Claims, secret: &str) -> Result<String, AuthError> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthError::Signing(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn bearer_token_strips_prefix() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
    }

    #[test]
    fn bearer_token_rejects_other_schemes() {
        assert_eq!(bearer_token("Basic dXNlcjpwYXNz"), None);
        assert_eq!(bearer_token("abc.def.ghi"), None);
        assert_eq!(bearer_token("Bearer "), None);
    }

    #[test]
    fn verify_token_round_trips_claims() {
        let claims = Claims::new("980768ff-bfeb-473e-83a4-86ada4102c03");
        let token = issue_token(&claims, SECRET).unwrap();

        let verified = verify_token(&token, SECRET).unwrap();

        assert_eq!(verified, claims);
    }

    #[test]
    fn verify_token_rejects_wrong_secret() {
        let token = issue_token(&Claims::new("user-1"), SECRET).unwrap();

        let result = verify_token(&token, "other-secret");

        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn verify_token_rejects_garbage() {
        assert!(verify_token("not-a-token", SECRET).is_err());
    }

    #[test]
    fn verify_token_rejects_expired() {
        let claims = Claims::new("user-1").with_expiry(1_000);
        let token = issue_token(&claims, SECRET).unwrap();

        assert!(verify_token(&token, SECRET).is_err());
    }

    #[test]
    fn verify_token_accepts_future_expiry() {
        let exp = chrono::Utc::now().timestamp() as u64 + 3_600;
        let claims = Claims::new("user-1").with_expiry(exp);
        let token = issue_token(&claims, SECRET).unwrap();

        assert_eq!(verify_token(&token, SECRET).unwrap().exp, Some(exp));
    }
}
