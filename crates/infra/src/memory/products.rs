use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use storefront_core::{ProductId, RepositoryError};
use storefront_products::{NewProduct, Product, ProductRepository, QuantityUpdate};

/// In-memory product catalog for tests/dev.
///
/// Applied update batches are kept so tests can assert exactly what the
/// stock write-back was (or was not) called with.
#[derive(Debug, Default)]
pub struct InMemoryProducts {
    inner: RwLock<HashMap<ProductId, Product>>,
    batches: RwLock<Vec<Vec<QuantityUpdate>>>,
}

impl InMemoryProducts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a catalog record directly (seeding, catalog edits).
    pub fn upsert(&self, product: Product) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(product.id, product);
        }
    }

    /// Current record for `id`, if any.
    pub fn get(&self, id: ProductId) -> Option<Product> {
        let map = self.inner.read().ok()?;
        map.get(&id).cloned()
    }

    /// Applied update batches, oldest first.
    pub fn update_batches(&self) -> Vec<Vec<QuantityUpdate>> {
        self.batches.read().map(|b| b.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProducts {
    async fn create(&self, new: NewProduct) -> Result<Product, RepositoryError> {
        let product = Product {
            id: ProductId::new(),
            name: new.name,
            unit_price: new.unit_price,
            quantity: new.quantity,
            created_at: Utc::now(),
        };

        let mut map = self
            .inner
            .write()
            .map_err(|_| RepositoryError::storage("product store lock poisoned"))?;
        map.insert(product.id, product.clone());
        Ok(product)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError> {
        let map = self
            .inner
            .read()
            .map_err(|_| RepositoryError::storage("product store lock poisoned"))?;
        Ok(map.values().find(|p| p.name == name).cloned())
    }

    async fn find_all_by_ids(&self, ids: &[ProductId]) -> Result<Vec<Product>, RepositoryError> {
        let map = self
            .inner
            .read()
            .map_err(|_| RepositoryError::storage("product store lock poisoned"))?;
        Ok(map.values().filter(|p| ids.contains(&p.id)).cloned().collect())
    }

    async fn update_quantities(&self, updates: Vec<QuantityUpdate>) -> Result<(), RepositoryError> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| RepositoryError::storage("product store lock poisoned"))?;
        for update in &updates {
            if let Some(product) = map.get_mut(&update.product_id) {
                product.quantity = update.quantity;
            }
        }
        drop(map);

        let mut batches = self
            .batches
            .write()
            .map_err(|_| RepositoryError::storage("product store lock poisoned"))?;
        batches.push(updates);
        Ok(())
    }
}
