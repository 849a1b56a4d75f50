use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use catalog_core::auth::AuthError;
use catalog_core::product::ValidationError;
use catalog_core::storage::{repository_error_to_status_code, RepositoryError};

/// Application error type that wraps `anyhow::Error`.
///
/// Known error types are recovered by downcasting and rendered as
/// `{"message", "type"}` JSON; validation failures carry their `details`.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(err) = self.0.downcast_ref::<ValidationError>() {
            tracing::debug!(fields = ?err.details.keys().collect::<Vec<_>>(), "Validation failed");
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "message": err.to_string(),
                    "details": err.details,
                })),
            )
                .into_response();
        }

        if let Some(err) = self.0.downcast_ref::<AuthError>() {
            tracing::debug!(error = %err, "Rejected request");
            return error_body(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", err.to_string());
        }

        let status_code = match self.0.downcast_ref::<RepositoryError>() {
            Some(repo_error) => {
                let code = repository_error_to_status_code(repo_error);
                StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            None => StatusCode::INTERNAL_SERVER_ERROR,
        };

        match status_code {
            StatusCode::NOT_FOUND => {
                tracing::debug!(error = %self.0, "Product lookup missed");
                error_body(
                    status_code,
                    "PRODUCT_NOT_FOUND",
                    "product not found".to_string(),
                )
            }
            StatusCode::SERVICE_UNAVAILABLE => {
                tracing::error!(error = %self.0, "Storage unavailable");
                error_body(
                    status_code,
                    "SERVICE_UNAVAILABLE",
                    "Service unavailable".to_string(),
                )
            }
            _ => {
                tracing::error!(error = %self.0, "Application error");
                error_body(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_SERVER_ERROR",
                    "Internal server error".to_string(),
                )
            }
        }
    }
}

fn error_body(status: StatusCode, kind: &str, message: String) -> Response {
    (status, Json(json!({ "message": message, "type": kind }))).into_response()
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::product::FieldError;
    use http_body_util::BodyExt;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let err = AppError::from(RepositoryError::NotFound {
            entity_type: "Product",
            id: "abc".to_string(),
        });

        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["type"], "PRODUCT_NOT_FOUND");
        assert_eq!(body["message"], "product not found");
    }

    #[tokio::test]
    async fn test_connection_failure_response() {
        let err = AppError::from(RepositoryError::ConnectionFailed("refused".to_string()));

        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["type"], "SERVICE_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let err = AppError::from(RepositoryError::MalformedRecord("Price".to_string()));

        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["type"], "INTERNAL_SERVER_ERROR");
        assert_eq!(body["message"], "Internal server error");
    }

    #[tokio::test]
    async fn test_auth_error_response() {
        let (status, body) = render(AppError::from(AuthError::MissingToken)).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["type"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_validation_error_response() {
        let err = AppError::from(ValidationError::single(
            "reqBody.product.price",
            FieldError::new("price has to be equal or greater than 0").with_value(json!(-1)),
        ));

        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "validation failed");
        assert_eq!(
            body["details"]["reqBody.product.price"],
            json!({"message": "price has to be equal or greater than 0", "value": -1})
        );
    }
}
