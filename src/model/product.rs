use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog entry: a garment or accessory offered by the store.
///
/// `price` is the current listed price. Orders never read it back after
/// checkout; each order line carries its own price snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub stock: u32,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal, stock: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            stock,
        }
    }
}

/// Payload for adding a product to the catalog.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: Decimal,
    pub stock: u32,
}

/// Payload for updating a catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub price: Option<Decimal>,
    pub stock: Option<u32>,
}
