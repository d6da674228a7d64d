use thiserror::Error;

use storefront_core::RepositoryError;

use crate::product::{NewProduct, Product};
use crate::repository::ProductRepository;

/// Product registration failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegisterProductError {
    /// A value failed validation (e.g. blank name, negative stock).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A product with this name is already in the catalog.
    #[error("product name already in use")]
    NameTaken,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl RegisterProductError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Registers products after validating catalog invariants.
#[derive(Debug)]
pub struct RegisterProductService<R> {
    products: R,
}

impl<R> RegisterProductService<R>
where
    R: ProductRepository,
{
    pub fn new(products: R) -> Self {
        Self { products }
    }

    pub async fn execute(&self, new: NewProduct) -> Result<Product, RegisterProductError> {
        if new.name.trim().is_empty() {
            return Err(RegisterProductError::validation("name cannot be empty"));
        }

        if new.quantity < 0 {
            return Err(RegisterProductError::validation(
                "initial quantity cannot be negative",
            ));
        }

        if self.products.find_by_name(&new.name).await?.is_some() {
            return Err(RegisterProductError::NameTaken);
        }

        let product = self.products.create(new).await?;
        tracing::debug!(product_id = %product.id, "product registered");
        Ok(product)
    }
}
