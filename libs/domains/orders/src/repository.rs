use async_trait::async_trait;

use crate::error::OrderResult;
use crate::models::Order;

/// Repository trait for Order persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Store an order and return its identifier
    async fn create(&self, order: Order) -> OrderResult<String>;
}
