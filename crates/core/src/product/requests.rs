//! Request body validation for product create/update.
//!
//! The HTTP layer hands over the raw JSON body. Validation collects every
//! field problem instead of stopping at the first one, and produces a
//! [`ProductData`] only when the whole body is valid.

use serde_json::Value;

use super::error::{FieldError, ValidationError};
use super::types::ProductData;

const BODY_PATH: &str = "reqBody.product";

/// Message for a negative price.
pub const NEGATIVE_PRICE_MESSAGE: &str = "price has to be equal or greater than 0";

/// Largest accepted price. Stored numbers must stay within DynamoDB's range.
pub const MAX_PRICE: f64 = 1e15;

/// Smallest accepted non-zero price.
pub const MIN_POSITIVE_PRICE: f64 = 1e-9;

/// Message for a price outside `MIN_POSITIVE_PRICE..=MAX_PRICE` (zero excepted).
pub const PRICE_RANGE_MESSAGE: &str = "price is out of range";

/// Validates a `{"product": {"name", "description", "price"}}` body.
pub fn validate_product_body(body: &Value) -> Result<ProductData, ValidationError> {
    let Some(product) = body.get("product").filter(|v| v.is_object()) else {
        return Err(ValidationError::single(
            BODY_PATH,
            FieldError::required("product"),
        ));
    };

    let mut errors = ValidationError {
        details: Default::default(),
    };

    let name = required_string(product, "name", &mut errors);
    let description = required_string(product, "description", &mut errors);
    let price = required_price(product, &mut errors);

    if let Some(name) = &name {
        if name.trim().is_empty() {
            errors.details.insert(
                field_path("name"),
                FieldError::new("name must not be empty").with_value(Value::from(name.as_str())),
            );
        }
    }

    match (name, description, price) {
        (Some(name), Some(description), Some(price)) if errors.details.is_empty() => {
            Ok(ProductData {
                name,
                description,
                price,
            })
        }
        _ => Err(errors),
    }
}

fn field_path(field: &str) -> String {
    format!("{BODY_PATH}.{field}")
}

fn required_string(product: &Value, field: &str, errors: &mut ValidationError) -> Option<String> {
    match product.get(field) {
        None | Some(Value::Null) => {
            errors
                .details
                .insert(field_path(field), FieldError::required(field));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            errors.details.insert(
                field_path(field),
                FieldError::new("invalid string value").with_value(other.clone()),
            );
            None
        }
    }
}

fn required_price(product: &Value, errors: &mut ValidationError) -> Option<f64> {
    match product.get("price") {
        None | Some(Value::Null) => {
            errors
                .details
                .insert(field_path("price"), FieldError::required("price"));
            None
        }
        Some(value @ Value::Number(n)) => match n.as_f64() {
            Some(price) if price == 0.0 || (MIN_POSITIVE_PRICE..=MAX_PRICE).contains(&price) => {
                Some(price)
            }
            Some(price) if price > 0.0 => {
                errors.details.insert(
                    field_path("price"),
                    FieldError::new(PRICE_RANGE_MESSAGE).with_value(value.clone()),
                );
                None
            }
            _ => {
                errors.details.insert(
                    field_path("price"),
                    FieldError::new(NEGATIVE_PRICE_MESSAGE).with_value(value.clone()),
                );
                None
            }
        },
        Some(other) => {
            errors.details.insert(
                field_path("price"),
                FieldError::new("invalid float number").with_value(other.clone()),
            );
            None
        }
    }
}
