use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// One line of an order.
///
/// `product_id` is stored as given and is not checked against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct OrderItem {
    #[validate(length(min = 1))]
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub product_id: String,
    #[validate(range(min = 1))]
    #[schema(example = 2)]
    pub quantity: u32,
    #[validate(range(min = 0.0))]
    #[schema(example = 14.0)]
    pub unit_price: f64,
}

impl OrderItem {
    pub fn subtotal(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

/// DTO for placing an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrder {
    #[validate(length(min = 1), nested)]
    pub items: Vec<OrderItem>,
    #[validate(length(min = 1, max = 200))]
    #[schema(example = "Ada Lovelace")]
    pub customer_name: String,
    #[validate(email)]
    #[schema(example = "ada@example.com")]
    pub customer_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500))]
    pub shipping_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

impl CreateOrder {
    /// Sum of every item's quantity times unit price
    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::subtotal).sum()
    }
}

/// Order as persisted: the submitted fields plus the computed total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    #[serde(flatten)]
    pub details: CreateOrder,
    pub total: f64,
}

impl From<CreateOrder> for Order {
    fn from(details: CreateOrder) -> Self {
        let total = details.total();
        Self { details, total }
    }
}
