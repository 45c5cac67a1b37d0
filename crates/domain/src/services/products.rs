//! Product catalog operations.

use std::sync::Arc;

use entity_store::EntityStore;

use crate::error::DomainError;
use crate::product::Product;
use common::EntityId;

/// Service for managing products. No update-in-place operation exists;
/// a product is added, listed, and eventually deleted.
#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn EntityStore<Product>>,
}

impl ProductService {
    /// Creates a new product service over the given store.
    pub fn new(store: Arc<dyn EntityStore<Product>>) -> Self {
        Self { store }
    }

    /// Persists a new product and returns it with its generated id. The
    /// owner reference is not checked against the user store.
    #[tracing::instrument(skip(self, product), fields(owner_id = %product.owner_id))]
    pub async fn add_product(&self, product: Product) -> Result<Product, DomainError> {
        let stored = self.store.create(product).await?;
        metrics::counter!("products_added_total").increment(1);
        Ok(stored)
    }

    /// Loads a product by id. Returns None if absent.
    #[tracing::instrument(skip(self))]
    pub async fn get_product(&self, id: EntityId) -> Result<Option<Product>, DomainError> {
        Ok(self.store.get(id).await?)
    }

    /// All products, in insertion order.
    #[tracing::instrument(skip(self))]
    pub async fn all_products(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.store.list().await?)
    }

    /// Products with the given owner, insertion order.
    #[tracing::instrument(skip(self))]
    pub async fn products_by_owner(&self, owner_id: EntityId) -> Result<Vec<Product>, DomainError> {
        let products = self.store.list().await?;
        Ok(products
            .into_iter()
            .filter(|p| p.owner_id == owner_id)
            .collect())
    }

    /// Deletes a product. A missing id is a no-op success, same policy
    /// as orders. Existing orders referencing the product stay valid —
    /// references are soft.
    #[tracing::instrument(skip(self))]
    pub async fn delete_product(&self, id: EntityId) -> Result<(), DomainError> {
        let _ = self.store.delete(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity_store::MemoryStore;

    fn service() -> ProductService {
        ProductService::new(Arc::new(MemoryStore::new()))
    }

    fn tomatoes(owner: i64) -> Product {
        Product {
            id: None,
            name: "Tomatoes".to_string(),
            description: Some("Vine-ripened".to_string()),
            price: 3.50,
            stock: 120,
            owner_id: EntityId::new(owner),
        }
    }

    #[tokio::test]
    async fn add_product_assigns_id_and_round_trips() {
        let service = service();

        let stored = service.add_product(tomatoes(1)).await.unwrap();
        assert!(stored.id.is_some());

        let fetched = service.get_product(stored.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(fetched, stored);
    }

    #[tokio::test]
    async fn products_by_owner_filters_exactly() {
        let service = service();
        service.add_product(tomatoes(1)).await.unwrap();
        service.add_product(tomatoes(2)).await.unwrap();
        service.add_product(tomatoes(1)).await.unwrap();

        assert_eq!(
            service.products_by_owner(EntityId::new(1)).await.unwrap().len(),
            2
        );
        assert!(
            service
                .products_by_owner(EntityId::new(5))
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn delete_missing_product_is_a_no_op() {
        let service = service();
        service.delete_product(EntityId::new(404)).await.unwrap();

        let stored = service.add_product(tomatoes(1)).await.unwrap();
        service.delete_product(stored.id.unwrap()).await.unwrap();
        service.delete_product(stored.id.unwrap()).await.unwrap();
        assert!(service.all_products().await.unwrap().is_empty());
    }
}
