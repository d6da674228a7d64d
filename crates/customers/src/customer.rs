use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::CustomerId;

/// A registered customer.
///
/// Order placement only consumes the identity; the remaining fields exist
/// for registration and directory lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Input for registering a new customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
}
