use std::sync::Arc;

use async_trait::async_trait;

use storefront_core::{ProductId, RepositoryError};

use crate::product::{NewProduct, Product, QuantityUpdate};

/// Catalog access.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product, assigning its identifier and timestamp.
    async fn create(&self, new: NewProduct) -> Result<Product, RepositoryError>;

    /// Look up a product by exact name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError>;

    /// Return the products matching the given ids.
    ///
    /// Unmatched ids are silently dropped; callers that need full coverage
    /// must compare the result against what they asked for.
    async fn find_all_by_ids(&self, ids: &[ProductId]) -> Result<Vec<Product>, RepositoryError>;

    /// Set the on-hand quantity of each listed product to the given level.
    async fn update_quantities(&self, updates: Vec<QuantityUpdate>) -> Result<(), RepositoryError>;
}

#[async_trait]
impl<S> ProductRepository for Arc<S>
where
    S: ProductRepository + ?Sized,
{
    async fn create(&self, new: NewProduct) -> Result<Product, RepositoryError> {
        (**self).create(new).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError> {
        (**self).find_by_name(name).await
    }

    async fn find_all_by_ids(&self, ids: &[ProductId]) -> Result<Vec<Product>, RepositoryError> {
        (**self).find_all_by_ids(ids).await
    }

    async fn update_quantities(&self, updates: Vec<QuantityUpdate>) -> Result<(), RepositoryError> {
        (**self).update_quantities(updates).await
    }
}
