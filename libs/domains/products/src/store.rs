use async_trait::async_trait;
use database::{DocumentResult, StoreClient};
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product};
use crate::repository::ProductRepository;

/// Collection products are stored in
pub const PRODUCT_COLLECTION: &str = "product";

/// [`ProductRepository`] backed by the shared document store
#[derive(Clone, Debug)]
pub struct StoreProductRepository {
    client: StoreClient,
}

impl StoreProductRepository {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductRepository for StoreProductRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let records = self.client.list_all(PRODUCT_COLLECTION).await?;
        let products = records
            .into_iter()
            .map(|record| record.deserialize::<Product>())
            .collect::<DocumentResult<Vec<_>>>()?;
        Ok(products)
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    async fn create(&self, input: CreateProduct) -> ProductResult<String> {
        let id = self.client.insert_one(PRODUCT_COLLECTION, &input).await?;
        Ok(id.to_string())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let product = self
            .client
            .find_by_id(PRODUCT_COLLECTION, id)
            .await?
            .map(|record| record.deserialize::<Product>())
            .transpose()?;
        Ok(product)
    }

    async fn count(&self) -> ProductResult<u64> {
        Ok(self.client.count(PRODUCT_COLLECTION).await?)
    }
}
