//! `storefront-infra` — storage implementations behind the repository traits.
//!
//! Currently in-memory stores (dev/test). SQL-backed implementations slot in
//! behind the same traits.

pub mod memory;

pub use memory::{InMemoryCustomers, InMemoryOrders, InMemoryProducts};
