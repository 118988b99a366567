//! Products Domain
//!
//! Catalog of products held in the shared document store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, empty-store degradation, seeding
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + document store implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use database::StoreClient;
//! use domain_products::{handlers, ProductService, StoreProductRepository};
//!
//! let repository = StoreProductRepository::new(StoreClient::unconfigured());
//! let service = ProductService::new(repository);
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod seed;
pub mod service;
pub mod store;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{CreateProduct, Product, SeedResult};
pub use repository::ProductRepository;
pub use service::ProductService;
pub use store::{PRODUCT_COLLECTION, StoreProductRepository};
