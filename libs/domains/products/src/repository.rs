use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{seed_products, Product};

/// Repository trait for Product storage
///
/// Products are kept in insertion order. The store does not enforce id
/// uniqueness; ids come from [`Product::new`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, in insertion order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn find_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// Append a product
    async fn insert(&self, product: Product) -> ProductResult<()>;

    /// Replace the product with the given id in place; false if absent
    async fn replace(&self, id: &str, product: Product) -> ProductResult<bool>;

    /// Remove the product with the given id; false if absent
    async fn remove_by_id(&self, id: &str) -> ProductResult<bool>;
}

/// In-memory implementation of ProductRepository
///
/// Contents live for the lifetime of the process. A single reader/writer
/// lock serializes mutations across request tasks.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the default catalog.
    pub fn with_seed_data() -> Self {
        Self::from_products(seed_products())
    }

    pub fn from_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, product: Product) -> ProductResult<()> {
        let mut products = self.products.write().await;
        tracing::info!(product_id = %product.id, "Created product");
        products.push(product);
        Ok(())
    }

    async fn replace(&self, id: &str, product: Product) -> ProductResult<bool> {
        let mut products = self.products.write().await;

        match products.iter_mut().find(|p| p.id == id) {
            Some(slot) => {
                *slot = product;
                tracing::info!(product_id = %id, "Updated product");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove_by_id(&self, id: &str) -> ProductResult<bool> {
        let mut products = self.products.write().await;

        match products.iter().position(|p| p.id == id) {
            Some(index) => {
                products.remove(index);
                tracing::info!(product_id = %id, "Deleted product");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
