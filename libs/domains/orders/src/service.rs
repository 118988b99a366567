//! Order Service - Business logic layer

use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use crate::error::OrderResult;
use crate::models::{CreateOrder, Order};
use crate::repository::OrderRepository;

/// Order service providing business logic operations
pub struct OrderService<R: OrderRepository> {
    repository: Arc<R>,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate and store an order, returning its identifier.
    ///
    /// Item product ids are taken as submitted; they are not looked up in
    /// the product catalog.
    #[instrument(skip(self, input), fields(items = input.items.len()))]
    pub async fn create_order(&self, input: CreateOrder) -> OrderResult<String> {
        input.validate()?;
        let order = Order::from(input);
        let total = order.total;
        let id = self.repository.create(order).await?;
        info!(%id, total, "Order created");
        Ok(id)
    }
}

impl<R: OrderRepository> Clone for OrderService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrderError;
    use crate::models::OrderItem;
    use crate::repository::MockOrderRepository;

    fn order() -> CreateOrder {
        CreateOrder {
            items: vec![OrderItem {
                product_id: "does-not-exist".to_string(),
                quantity: 3,
                unit_price: 2.5,
            }],
            customer_name: "Grace Hopper".to_string(),
            customer_email: "grace@example.com".to_string(),
            shipping_address: Some("1 Navy Way".to_string()),
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_order_stores_total() {
        let mut mock_repo = MockOrderRepository::new();
        mock_repo.expect_create().times(1).returning(|order| {
            assert_eq!(order.total, 7.5);
            assert_eq!(order.details.items[0].product_id, "does-not-exist");
            Ok("65a1f0c2e4b0a1b2c3d4e5f6".to_string())
        });

        let service = OrderService::new(mock_repo);
        let id = service.create_order(order()).await.unwrap();

        assert_eq!(id, "65a1f0c2e4b0a1b2c3d4e5f6");
    }

    #[tokio::test]
    async fn test_create_order_rejects_invalid_input_before_store() {
        let mut mock_repo = MockOrderRepository::new();
        mock_repo.expect_create().never();

        let service = OrderService::new(mock_repo);
        let input = CreateOrder {
            items: vec![],
            ..order()
        };

        assert!(matches!(
            service.create_order(input).await,
            Err(OrderError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_create_order_without_store_fails() {
        let mut mock_repo = MockOrderRepository::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(OrderError::StoreUnavailable));

        let service = OrderService::new(mock_repo);

        assert!(matches!(
            service.create_order(order()).await,
            Err(OrderError::StoreUnavailable)
        ));
    }
}
