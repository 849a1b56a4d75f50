use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// A request body that failed validation.
///
/// `details` is keyed by the path of the offending field
/// (`reqBody.product.price`) so every problem is reported at once.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("validation failed")]
pub struct ValidationError {
    pub details: BTreeMap<String, FieldError>,
}

/// A single field failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            value: None,
        }
    }

    /// Error for a field that was absent or null.
    pub fn required(field: &str) -> Self {
        Self::new(format!("'{field}' is required"))
    }

    /// Attaches the rejected value.
    pub fn with_value(mut self, value: serde_json::Value) -> Self {
        self.value = Some(value);
        self
    }
}

impl ValidationError {
    /// Creates an error with a single field failure.
    pub fn single(path: impl Into<String>, error: FieldError) -> Self {
        let mut details = BTreeMap::new();
        details.insert(path.into(), error);
        Self { details }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let error = ValidationError::single("reqBody.product.name", FieldError::required("name"));
        assert_eq!(error.to_string(), "validation failed");
    }

    #[test]
    fn test_field_error_omits_missing_value() {
        let json = serde_json::to_value(FieldError::required("price")).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "'price' is required" }));
    }

    #[test]
    fn test_field_error_includes_value() {
        let error = FieldError::new("price has to be equal or greater than 0")
            .with_value(serde_json::json!(-1000));
        let json = serde_json::to_value(error).unwrap();

        assert_eq!(json["value"], -1000);
    }
}
