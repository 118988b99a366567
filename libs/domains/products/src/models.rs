use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn default_in_stock() -> bool {
    true
}

/// Product as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Store-assigned identifier, 24 hex characters
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    /// Image URL
    #[serde(default)]
    pub image: Option<String>,
}

/// DTO for creating a new product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 200))]
    #[schema(example = "Ceramic Mug")]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: String,
    #[validate(range(min = 0.0))]
    #[schema(example = 14.0)]
    pub price: f64,
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Home")]
    pub category: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    #[validate(url)]
    pub image: Option<String>,
}

impl CreateProduct {
    /// The product this input becomes once stored under `id`
    pub fn into_product(self, id: impl Into<String>) -> Product {
        Product {
            id: id.into(),
            title: self.title,
            description: self.description,
            price: self.price,
            category: self.category,
            in_stock: self.in_stock,
            image: self.image,
        }
    }
}

/// Outcome of seeding the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SeedResult {
    /// Number of products inserted by this call
    pub inserted: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SeedResult {
    pub fn inserted(count: u64) -> Self {
        Self {
            inserted: count,
            message: None,
        }
    }

    pub fn already_seeded() -> Self {
        Self {
            inserted: 0,
            message: Some("Products already exist".to_string()),
        }
    }
}
