use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{CustomerId, OrderId, OrderLineId, ProductId};

/// One product as requested by the caller; exists only for the duration of
/// a single placement.
///
/// The quantity is treated as caller-guaranteed; zero or negative values
/// pass through unvalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedProduct {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// A line priced at validation time, ready to persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedLine {
    pub product_id: ProductId,
    pub quantity: i64,
    /// Price in smallest currency unit, copied from the catalog. Later
    /// catalog price changes never reprice this line.
    pub unit_price: u64,
}

/// A persisted order line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: OrderLineId,
    pub product_id: ProductId,
    pub quantity: i64,
    /// Price in smallest currency unit (e.g., cents).
    pub unit_price: u64,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub lines: Vec<OrderLine>,
    pub created_at: DateTime<Utc>,
}
