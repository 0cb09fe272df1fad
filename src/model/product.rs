//! Products offered by the commerce service.
//!
//! A [`Product`] is server-owned and immutable on the client. The loader receives a
//! point-in-time snapshot as an ordered [`Catalog`].
use crate::model::ProductId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl Product {
    /// Creates a new Product.
    ///
    /// # Arguments
    /// * `id` - Identifier as issued by the service
    /// * `name` - Display label
    /// * `price` - Non-negative amount, currency implied by context
    /// * `category` - Free-text classification
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category: category.into(),
        }
    }
}

/// Body of `GET /acp/catalog`. Only `products` is read; anything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogPayload {
    pub products: Vec<Product>,
}

/// An immutable, cheaply cloneable snapshot of the catalog in server order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: products.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }
}
