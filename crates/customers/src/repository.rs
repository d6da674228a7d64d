use std::sync::Arc;

use async_trait::async_trait;

use storefront_core::{CustomerId, RepositoryError};

use crate::customer::{Customer, NewCustomer};

/// Customer directory access.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Persist a new customer, assigning its identifier and timestamp.
    async fn create(&self, new: NewCustomer) -> Result<Customer, RepositoryError>;

    /// Look up a customer by id. `None` when absent.
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError>;

    /// Look up a customer by exact email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, RepositoryError>;
}

#[async_trait]
impl<S> CustomerRepository for Arc<S>
where
    S: CustomerRepository + ?Sized,
{
    async fn create(&self, new: NewCustomer) -> Result<Customer, RepositoryError> {
        (**self).create(new).await
    }

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        (**self).find_by_id(id).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, RepositoryError> {
        (**self).find_by_email(email).await
    }
}
