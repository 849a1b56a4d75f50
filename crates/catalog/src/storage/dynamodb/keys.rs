//! DynamoDB key attributes for the products table.

use aws_sdk_dynamodb::types::AttributeValue;

/// Partition key attribute. The table has no sort key.
pub const PRODUCT_ID: &str = "ProductID";

/// Condition that holds only when an item with the key already exists.
pub const ITEM_EXISTS: &str = "attribute_exists(ProductID)";

/// Key value addressing the product with `id`.
pub fn product_key(id: &str) -> AttributeValue {
    AttributeValue::S(id.to_string())
}
