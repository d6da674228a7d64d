use thiserror::Error;

use storefront_core::RepositoryError;

use crate::customer::{Customer, NewCustomer};
use crate::repository::CustomerRepository;

/// Customer registration failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegisterCustomerError {
    /// A value failed validation (e.g. blank name or email).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The email address is already registered to another customer.
    #[error("email address already in use")]
    EmailTaken,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl RegisterCustomerError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Registers customers after validating directory invariants.
#[derive(Debug)]
pub struct RegisterCustomerService<R> {
    customers: R,
}

impl<R> RegisterCustomerService<R>
where
    R: CustomerRepository,
{
    pub fn new(customers: R) -> Self {
        Self { customers }
    }

    pub async fn execute(&self, new: NewCustomer) -> Result<Customer, RegisterCustomerError> {
        if new.name.trim().is_empty() {
            return Err(RegisterCustomerError::validation("name cannot be empty"));
        }

        if new.email.trim().is_empty() {
            return Err(RegisterCustomerError::validation("email cannot be empty"));
        }

        if self.customers.find_by_email(&new.email).await?.is_some() {
            return Err(RegisterCustomerError::EmailTaken);
        }

        let customer = self.customers.create(new).await?;
        tracing::debug!(customer_id = %customer.id, "customer registered");
        Ok(customer)
    }
}
