//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, SeedResult};
use crate::repository::ProductRepository;
use crate::seed::sample_products;

/// Product service providing business logic operations
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List every product.
    ///
    /// Without a configured store the catalog is reported as empty rather
    /// than as an error.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        match self.repository.list().await {
            Err(ProductError::StoreUnavailable) => {
                warn!("Listing products without a configured store, returning empty list");
                Ok(Vec::new())
            }
            result => result,
        }
    }

    /// Validate and store a new product, returning its identifier
    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<String> {
        input.validate()?;
        let id = self.repository.create(input).await?;
        info!(%id, "Product created");
        Ok(id)
    }

    /// Get a product by its external identifier
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound)
    }

    /// Insert the demo catalog unless any product already exists.
    ///
    /// The emptiness check and the inserts are separate store calls, so two
    /// concurrent seeds against an empty catalog can both insert.
    #[instrument(skip(self))]
    pub async fn seed_products(&self) -> ProductResult<SeedResult> {
        let existing = self.repository.count().await?;
        if existing > 0 {
            info!(existing, "Catalog already populated, skipping seed");
            return Ok(SeedResult::already_seeded());
        }

        let mut inserted = 0;
        for product in sample_products() {
            self.repository.create(product).await?;
            inserted += 1;
        }

        info!(inserted, "Catalog seeded");
        Ok(SeedResult::inserted(inserted))
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;

    const VALID_ID: &str = "65a1f0c2e4b0a1b2c3d4e5f6";

    fn mug() -> CreateProduct {
        CreateProduct {
            title: "Ceramic Mug".to_string(),
            description: "12oz".to_string(),
            price: 14.0,
            category: "Home".to_string(),
            in_stock: true,
            image: None,
        }
    }

    #[tokio::test]
    async fn test_list_products_degrades_to_empty_without_store() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list()
            .returning(|| Err(ProductError::StoreUnavailable));

        let service = ProductService::new(mock_repo);
        let products = service.list_products().await.unwrap();

        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_list_products_propagates_backend_errors() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list()
            .returning(|| Err(ProductError::Database("connection reset".into())));

        let service = ProductService::new(mock_repo);
        let result = service.list_products().await;

        assert!(matches!(result, Err(ProductError::Database(_))));
    }

    #[tokio::test]
    async fn test_create_product_returns_id() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_create()
            .with(mockall::predicate::eq(mug()))
            .times(1)
            .returning(|_| Ok(VALID_ID.to_string()));

        let service = ProductService::new(mock_repo);
        let id = service.create_product(mug()).await.unwrap();

        assert_eq!(id, VALID_ID);
    }

    #[tokio::test]
    async fn test_create_product_rejects_invalid_input_before_store() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_create().never();

        let service = ProductService::new(mock_repo);
        let input = CreateProduct {
            price: -5.0,
            ..mug()
        };
        let result = service.create_product(input).await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_product_without_store_fails() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(ProductError::StoreUnavailable));

        let service = ProductService::new(mock_repo);
        let result = service.create_product(mug()).await;

        assert!(matches!(result, Err(ProductError::StoreUnavailable)));
    }

    #[tokio::test]
    async fn test_get_product_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_id().times(1).returning(|id| {
            assert_eq!(id, VALID_ID);
            Ok(Some(mug().into_product(id)))
        });

        let service = ProductService::new(mock_repo);
        let product = service.get_product(VALID_ID).await.unwrap();

        assert_eq!(product.id, VALID_ID);
        assert_eq!(product.title, "Ceramic Mug");
    }

    #[tokio::test]
    async fn test_get_product_missing_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service.get_product(VALID_ID).await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }

    #[tokio::test]
    async fn test_seed_inserts_samples_into_empty_catalog() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_count().times(1).returning(|| Ok(0));
        mock_repo
            .expect_create()
            .times(4)
            .returning(|_| Ok(VALID_ID.to_string()));

        let service = ProductService::new(mock_repo);
        let result = service.seed_products().await.unwrap();

        assert_eq!(result, SeedResult::inserted(4));
    }

    #[tokio::test]
    async fn test_seed_skips_populated_catalog() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_count().returning(|| Ok(1));
        mock_repo.expect_create().never();

        let service = ProductService::new(mock_repo);
        let result = service.seed_products().await.unwrap();

        assert_eq!(result, SeedResult::already_seeded());
    }

    #[tokio::test]
    async fn test_seed_without_store_fails() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_count()
            .returning(|| Err(ProductError::StoreUnavailable));

        let service = ProductService::new(mock_repo);
        let result = service.seed_products().await;

        assert!(matches!(result, Err(ProductError::StoreUnavailable)));
    }
}
