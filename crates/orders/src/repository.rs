use std::sync::Arc;

use async_trait::async_trait;

use storefront_core::{OrderId, RepositoryError};
use storefront_customers::Customer;

use crate::order::{Order, PricedLine};

/// Order persistence.
#[async_trait]
pub trait OrdersRepository: Send + Sync {
    /// Atomically persist an order for `customer` with the given lines,
    /// assigning the order and line identifiers. The returned order carries
    /// the persisted lines, which may hold system-assigned metadata distinct
    /// from the input.
    async fn create(
        &self,
        customer: &Customer,
        lines: Vec<PricedLine>,
    ) -> Result<Order, RepositoryError>;

    /// Look up an order by id. `None` when absent.
    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, RepositoryError>;
}

#[async_trait]
impl<S> OrdersRepository for Arc<S>
where
    S: OrdersRepository + ?Sized,
{
    async fn create(
        &self,
        customer: &Customer,
        lines: Vec<PricedLine>,
    ) -> Result<Order, RepositoryError> {
        (**self).create(customer, lines).await
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        (**self).find_by_id(id).await
    }
}
