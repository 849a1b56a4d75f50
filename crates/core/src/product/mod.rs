mod error;
mod requests;
mod types;

pub use error::{FieldError, ValidationError};
pub use requests::{
    validate_product_body, MAX_PRICE, MIN_POSITIVE_PRICE, NEGATIVE_PRICE_MESSAGE, PRICE_RANGE_MESSAGE,
};
pub use types::{Product, ProductData};
