use crate::product::Product;

/// One page of a product listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub products: Vec<Product>,
    /// Pass back to continue after this page. `None` once the listing is exhausted.
    pub next_cursor: Option<String>,
}

impl ProductPage {
    /// A page with nothing after it.
    pub fn last(products: Vec<Product>) -> Self {
        Self {
            products,
            next_cursor: None,
        }
    }

    pub fn is_last(&self) -> bool {
        self.next_cursor.is_none()
    }
}
