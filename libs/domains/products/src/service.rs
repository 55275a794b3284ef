use std::sync::Arc;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Result of a create attempt.
///
/// Duplicate names are an expected business outcome, not a failure, so they
/// travel in the Ok channel and the caller decides how to present them.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    Created(Product),
    DuplicateName(String),
}

/// Business logic over a product repository.
///
/// Absence and duplicates come back as values; the error channel carries
/// storage failures only.
#[derive(Debug, Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a product, enforcing name uniqueness.
    ///
    /// The check-then-insert window is closed by the unique index on name:
    /// a lost race surfaces as a constraint violation and resolves to the
    /// same DuplicateName outcome.
    pub async fn create(&self, input: CreateProduct) -> ProductResult<CreateOutcome> {
        if let Some(existing) = self.repository.find_by_name(&input.name).await? {
            return Ok(CreateOutcome::DuplicateName(existing.name));
        }
        match self.repository.create(input).await {
            Ok(product) => Ok(CreateOutcome::Created(product)),
            Err(ProductError::DuplicateName(name)) => Ok(CreateOutcome::DuplicateName(name)),
            Err(e) => Err(e),
        }
    }

    pub async fn get_all(&self) -> ProductResult<Vec<Product>> {
        self.repository.get_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        self.repository.get_by_id(id).await
    }

    pub async fn update(&self, id: i32, update: UpdateProduct) -> ProductResult<Option<Product>> {
        self.repository.update_by_id(id, update).await
    }

    pub async fn delete(&self, id: i32) -> ProductResult<bool> {
        self.repository.delete_by_id(id).await
    }
}
