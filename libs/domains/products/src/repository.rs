use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every stored product, in store order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Store a new product and return its identifier
    async fn create(&self, input: CreateProduct) -> ProductResult<String>;

    /// Get a product by its external identifier
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// Number of stored products
    async fn count(&self) -> ProductResult<u64>;
}
