//! Orders Domain
//!
//! Orders are written once and never read back through the API. Item
//! product ids are stored as submitted; nothing ties them to the catalog.
//!
//! ```rust,ignore
//! use database::StoreClient;
//! use domain_orders::{handlers, OrderService, StoreOrderRepository};
//!
//! let service = OrderService::new(StoreOrderRepository::new(StoreClient::unconfigured()));
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod store;

pub use error::{OrderError, OrderResult};
pub use handlers::ApiDoc;
pub use models::{CreateOrder, Order, OrderItem};
pub use repository::OrderRepository;
pub use service::OrderService;
pub use store::{ORDER_COLLECTION, StoreOrderRepository};
