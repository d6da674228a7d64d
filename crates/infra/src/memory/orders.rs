use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use storefront_core::{OrderId, OrderLineId, RepositoryError};
use storefront_customers::Customer;
use storefront_orders::{Order, OrderLine, OrdersRepository, PricedLine};

/// In-memory order store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryOrders {
    inner: RwLock<HashMap<OrderId, Order>>,
}

impl InMemoryOrders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of orders created so far.
    pub fn created_count(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }
}

#[async_trait]
impl OrdersRepository for InMemoryOrders {
    async fn create(
        &self,
        customer: &Customer,
        lines: Vec<PricedLine>,
    ) -> Result<Order, RepositoryError> {
        let order = Order {
            id: OrderId::new(),
            customer_id: customer.id,
            lines: lines
                .into_iter()
                .map(|l| OrderLine {
                    id: OrderLineId::new(),
                    product_id: l.product_id,
                    quantity: l.quantity,
                    unit_price: l.unit_price,
                })
                .collect(),
            created_at: Utc::now(),
        };

        let mut map = self
            .inner
            .write()
            .map_err(|_| RepositoryError::storage("order store lock poisoned"))?;
        map.insert(order.id, order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let map = self
            .inner
            .read()
            .map_err(|_| RepositoryError::storage("order store lock poisoned"))?;
        Ok(map.get(&id).cloned())
    }
}
