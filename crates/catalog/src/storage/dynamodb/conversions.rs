//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and products.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use catalog_core::product::Product;
use catalog_core::storage::RepositoryError;
use chrono::{DateTime, Utc};

use super::keys::PRODUCT_ID;

pub const NAME: &str = "Name";
pub const DESCRIPTION: &str = "Description";
pub const PRICE: &str = "Price";
pub const CREATED_AT: &str = "CreatedAt";

/// Convert a Product to DynamoDB item.
///
/// `Price` and `CreatedAt` (epoch milliseconds) are number attributes,
/// everything else is a string attribute.
pub fn product_to_item(product: &Product) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(
        PRODUCT_ID.to_string(),
        AttributeValue::S(product.id.clone()),
    );
    item.insert(NAME.to_string(), AttributeValue::S(product.name.clone()));
    item.insert(
        DESCRIPTION.to_string(),
        AttributeValue::S(product.description.clone()),
    );
    item.insert(
        PRICE.to_string(),
        AttributeValue::N(product.price.to_string()),
    );
    item.insert(
        CREATED_AT.to_string(),
        AttributeValue::N(product.created_at.timestamp_millis().to_string()),
    );

    item
}

/// Convert a DynamoDB item to Product.
pub fn item_to_product(item: &HashMap<String, AttributeValue>) -> Result<Product, RepositoryError> {
    Ok(Product {
        id: get_string(item, PRODUCT_ID)?,
        name: get_string(item, NAME)?,
        description: get_string(item, DESCRIPTION)?,
        price: get_f64(item, PRICE)?,
        created_at: get_datetime_millis(item, CREATED_AT)?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| missing_field(key))
}

/// Get the raw text of a required number attribute.
fn get_number<'a>(
    item: &'a HashMap<String, AttributeValue>,
    key: &str,
) -> Result<&'a str, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_n().ok())
        .map(String::as_str)
        .ok_or_else(|| missing_field(key))
}

/// Get a required floating point number attribute.
fn get_f64(item: &HashMap<String, AttributeValue>, key: &str) -> Result<f64, RepositoryError> {
    let n = get_number(item, key)?;
    n.parse::<f64>()
        .map_err(|e| RepositoryError::MalformedRecord(format!("Invalid number {}: {}", key, e)))
}

/// Get a required timestamp stored as integer epoch milliseconds.
fn get_datetime_millis(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<DateTime<Utc>, RepositoryError> {
    let n = get_number(item, key)?;
    let millis = n.parse::<i64>().map_err(|e| {
        RepositoryError::MalformedRecord(format!("Invalid epoch millis {}: {}", key, e))
    })?;
    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        RepositoryError::MalformedRecord(format!("Timestamp out of range {}: {}", key, millis))
    })
}

fn missing_field(key: &str) -> RepositoryError {
    RepositoryError::MalformedRecord(format!("Missing or invalid field: {}", key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::product::ProductData;

    fn sample_product() -> Product {
        Product::new(ProductData::new("iPhone 12", "brand new", 1999.99))
            .with_id("980768ff-bfeb-473e-83a4-86ada4102c03")
            .with_created_at(DateTime::from_timestamp_millis(1_670_957_939_044).unwrap())
    }

    fn sample_item() -> HashMap<String, AttributeValue> {
        HashMap::from([
            (
                "ProductID".to_string(),
                AttributeValue::S("980768ff-bfeb-473e-83a4-86ada4102c03".to_string()),
            ),
            ("Name".to_string(), AttributeValue::S("iPhone 12".to_string())),
            (
                "Description".to_string(),
                AttributeValue::S("brand new".to_string()),
            ),
            ("Price".to_string(), AttributeValue::N("1999.99".to_string())),
            (
                "CreatedAt".to_string(),
                AttributeValue::N("1670957939044".to_string()),
            ),
        ])
    }

    #[test]
    fn test_product_to_item() {
        assert_eq!(product_to_item(&sample_product()), sample_item());
    }

    #[test]
    fn test_item_to_product() {
        assert_eq!(item_to_product(&sample_item()).unwrap(), sample_product());
    }

    #[test]
    fn test_product_round_trip() {
        let product = Product::new(ProductData::new("Lamp", "", 0.1 + 0.2));
        let parsed = item_to_product(&product_to_item(&product)).unwrap();

        assert_eq!(parsed, product);
    }

    #[test]
    fn test_integral_price_round_trip() {
        let product = sample_product().replaced_with(ProductData::new("Cable", "USB-C", 10.0));
        let item = product_to_item(&product);

        assert_eq!(item.get("Price").unwrap().as_n().unwrap(), "10");
        assert_eq!(item_to_product(&item).unwrap().price, 10.0);
    }

    #[test]
    fn test_extra_attributes_are_ignored() {
        let mut item = sample_item();
        item.insert("Legacy".to_string(), AttributeValue::Bool(true));

        assert_eq!(item_to_product(&item).unwrap(), sample_product());
    }

    #[test]
    fn test_missing_attribute_is_malformed() {
        let mut item = sample_item();
        item.remove("Description");

        let err = item_to_product(&item).unwrap_err();
        assert_eq!(
            err,
            RepositoryError::MalformedRecord("Missing or invalid field: Description".to_string())
        );
    }

    #[test]
    fn test_wrong_attribute_type_is_malformed() {
        let mut item = sample_item();
        item.insert("Price".to_string(), AttributeValue::S("1999.99".to_string()));

        assert!(matches!(
            item_to_product(&item),
            Err(RepositoryError::MalformedRecord(_))
        ));
    }

    #[test]
    fn test_unparsable_number_is_malformed() {
        let mut item = sample_item();
        item.insert("Price".to_string(), AttributeValue::N("cheap".to_string()));

        assert!(matches!(
            item_to_product(&item),
            Err(RepositoryError::MalformedRecord(_))
        ));
    }

    #[test]
    fn test_fractional_created_at_is_malformed() {
        let mut item = sample_item();
        item.insert(
            "CreatedAt".to_string(),
            AttributeValue::N("1670957939044.5".to_string()),
        );

        assert!(matches!(
            item_to_product(&item),
            Err(RepositoryError::MalformedRecord(_))
        ));
    }

    #[test]
    fn test_empty_item_is_malformed() {
        assert!(item_to_product(&HashMap::new()).is_err());
    }
}
