use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use storefront_core::{CustomerId, RepositoryError};
use storefront_customers::{Customer, CustomerRepository, NewCustomer};

/// In-memory customer directory for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryCustomers {
    inner: RwLock<HashMap<CustomerId, Customer>>,
}

impl InMemoryCustomers {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomers {
    async fn create(&self, new: NewCustomer) -> Result<Customer, RepositoryError> {
        let customer = Customer {
            id: CustomerId::new(),
            name: new.name,
            email: new.email,
            created_at: Utc::now(),
        };

        let mut map = self
            .inner
            .write()
            .map_err(|_| RepositoryError::storage("customer store lock poisoned"))?;
        map.insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        let map = self
            .inner
            .read()
            .map_err(|_| RepositoryError::storage("customer store lock poisoned"))?;
        Ok(map.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, RepositoryError> {
        let map = self
            .inner
            .read()
            .map_err(|_| RepositoryError::storage("customer store lock poisoned"))?;
        Ok(map.values().find(|c| c.email == email).cloned())
    }
}
