use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Data access contract for products.
///
/// Absence is reported by value (`None` / `false`), never as an error;
/// the error channel is reserved for storage failures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product and return it with its assigned id
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Look up a product by exact name match
    async fn find_by_name(&self, name: &str) -> ProductResult<Option<Product>>;

    /// Fetch every product, ordered by id
    async fn get_all(&self) -> ProductResult<Vec<Product>>;

    /// Fetch a single product by id
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Merge the present fields of `update` into the stored product.
    /// Returns the updated product, or `None` when the id is unknown.
    async fn update_by_id(&self, id: i32, update: UpdateProduct) -> ProductResult<Option<Product>>;

    /// Remove a product; `false` when the id was unknown
    async fn delete_by_id(&self, id: i32) -> ProductResult<bool>;
}

#[derive(Debug, Default)]
struct Store {
    products: BTreeMap<i32, Product>,
    next_id: i32,
}

/// In-memory repository backed by a BTreeMap, for tests and local runs
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;
        store.next_id += 1;
        let product = Product {
            id: store.next_id,
            name: input.name,
            description: input.description,
            price: input.price,
            stock_quantity: input.stock_quantity,
        };
        store.products.insert(product.id, product.clone());
        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn find_by_name(&self, name: &str) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.values().find(|p| p.name == name).cloned())
    }

    async fn get_all(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store.products.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn update_by_id(&self, id: i32, update: UpdateProduct) -> ProductResult<Option<Product>> {
        let mut store = self.store.write().await;
        let Some(product) = store.products.get_mut(&id) else {
            return Ok(None);
        };
        product.apply_update(update);
        tracing::info!(product_id = id, "Updated product");
        Ok(Some(product.clone()))
    }

    async fn delete_by_id(&self, id: i32) -> ProductResult<bool> {
        let mut store = self.store.write().await;
        let removed = store.products.remove(&id).is_some();
        if removed {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget_input() -> CreateProduct {
        CreateProduct {
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: 9.99,
            stock_quantity: 10,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryProductRepository::new();
        let first = repo.create(widget_input()).await.unwrap();
        let second = repo
            .create(CreateProduct {
                name: "Gadget".to_string(),
                ..widget_input()
            })
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(widget_input()).await.unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_find_by_name_is_exact_match() {
        let repo = InMemoryProductRepository::new();
        repo.create(widget_input()).await.unwrap();

        let found = repo.find_by_name("Widget").await.unwrap();
        assert!(found.is_some());

        assert!(repo.find_by_name("widget").await.unwrap().is_none());
        assert!(repo.find_by_name("Widge").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_all_is_ordered_and_idempotent() {
        let repo = InMemoryProductRepository::new();
        repo.create(widget_input()).await.unwrap();
        repo.create(CreateProduct {
            name: "Gadget".to_string(),
            ..widget_input()
        })
        .await
        .unwrap();

        let first = repo.get_all().await.unwrap();
        let second = repo.get_all().await.unwrap();

        assert_eq!(first.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_update_merges_only_present_fields() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(widget_input()).await.unwrap();

        let updated = repo
            .update_by_id(
                created.id,
                UpdateProduct {
                    price: Some(12.50),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.price, 12.50);
        assert_eq!(updated.name, "Widget");
        assert_eq!(updated.stock_quantity, 10);
    }

    #[tokio::test]
    async fn test_update_unknown_id_returns_none_and_writes_nothing() {
        let repo = InMemoryProductRepository::new();
        let result = repo
            .update_by_id(
                42,
                UpdateProduct {
                    name: Some("Ghost".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(result.is_none());
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_reports_absence_on_second_call() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(widget_input()).await.unwrap();

        assert!(repo.delete_by_id(created.id).await.unwrap());
        assert!(!repo.delete_by_id(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_get_unknown_id_returns_none() {
        let repo = InMemoryProductRepository::new();
        assert!(repo.get_by_id(99).await.unwrap().is_none());
    }
}
