//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductFields, ProductInput, REQUIRED_FIELDS};
use crate::query::{self, ProductPage, ProductQuery};
use crate::repository::ProductRepository;
use crate::stats::{compute_stats, ProductStats};

/// Product service providing business logic operations
///
/// The service layer validates input, applies query rules, and orchestrates
/// repository operations.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Checks a create/update body and returns its fields.
    pub fn validate_input(input: ProductInput) -> ProductResult<ProductFields> {
        input.validate()?;
        input
            .into_fields()
            .ok_or_else(|| ProductError::Validation(REQUIRED_FIELDS.to_string()))
    }

    /// List one page of products matching the query filters
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: ProductQuery) -> ProductResult<ProductPage> {
        let products = self.repository.list().await?;
        Ok(query::paginate(products, &query.filter(), query.pagination()))
    }

    /// Search products by name
    #[instrument(skip(self))]
    pub async fn search_products(&self, q: Option<&str>) -> ProductResult<Vec<Product>> {
        let products = self.repository.list().await?;
        query::search(products, q)
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Create a new product
    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product> {
        let fields = Self::validate_input(input)?;
        let product = Product::new(fields);

        self.repository.insert(product.clone()).await?;
        Ok(product)
    }

    /// Replace an existing product's fields, keeping its id
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: &str, input: ProductInput) -> ProductResult<Product> {
        let fields = Self::validate_input(input)?;

        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        let updated = existing.replaced_with(fields);

        // A delete may land between the lookup and the write.
        if !self.repository.replace(id, updated.clone()).await? {
            return Err(ProductError::NotFound(id.to_string()));
        }
        Ok(updated)
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<()> {
        if !self.repository.remove_by_id(id).await? {
            return Err(ProductError::NotFound(id.to_string()));
        }
        Ok(())
    }

    /// Aggregate counts over the whole catalog
    #[instrument(skip(self))]
    pub async fn stats(&self) -> ProductResult<ProductStats> {
        let products = self.repository.list().await?;
        Ok(compute_stats(&products))
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
