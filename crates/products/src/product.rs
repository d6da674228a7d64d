use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::ProductId;

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Price in smallest currency unit (e.g., cents).
    pub unit_price: u64,
    /// Units on hand. Signed so that an overdraft produced by uncoordinated
    /// concurrent orders is representable rather than a wrap/panic.
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
}

/// Input for registering a new product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    /// Price in smallest currency unit (e.g., cents).
    pub unit_price: u64,
    /// Initial units on hand.
    pub quantity: i64,
}

/// Absolute post-order stock level for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityUpdate {
    pub product_id: ProductId,
    pub quantity: i64,
}
