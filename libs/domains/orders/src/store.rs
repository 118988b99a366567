use async_trait::async_trait;
use database::StoreClient;
use tracing::instrument;

use crate::error::OrderResult;
use crate::models::Order;
use crate::repository::OrderRepository;

/// Collection orders are stored in
pub const ORDER_COLLECTION: &str = "order";

/// [`OrderRepository`] backed by the shared document store
#[derive(Clone, Debug)]
pub struct StoreOrderRepository {
    client: StoreClient,
}

impl StoreOrderRepository {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrderRepository for StoreOrderRepository {
    #[instrument(skip(self, order), fields(items = order.details.items.len()))]
    async fn create(&self, order: Order) -> OrderResult<String> {
        let id = self.client.insert_one(ORDER_COLLECTION, &order).await?;
        Ok(id.to_string())
    }
}
