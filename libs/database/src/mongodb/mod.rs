//! MongoDB connector and document store
//!
//! Provides connection management and the MongoDB-backed [`DocumentStore`](crate::document::DocumentStore).

mod config;
mod connector;
mod store;

pub use config::MongoConfig;
pub use connector::{MongoError, connect_from_config, connect_from_config_with_retry, open_store};
pub use store::MongoDocumentStore;
