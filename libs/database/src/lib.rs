//! Document store access for the shop services
//!
//! Domain crates depend on [`document::StoreClient`], a handle that is either
//! backed by a [`document::DocumentStore`] or deliberately empty when no
//! database is configured. The MongoDB implementation and its connector live in
//! [`mongodb`].
//!
//! # Features
//!
//! - `config` - `core_config::FromEnv` for `MongoConfig`
//!
//! # Example
//!
//! ```ignore
//! use database::document::StoreClient;
//! use database::mongodb::{MongoConfig, open_store};
//!
//! let store = open_store(&MongoConfig::new("mongodb://localhost:27017", "shop"), None).await?;
//! let client = StoreClient::new(store);
//! let products = client.list_all("product").await?;
//! ```

pub mod common;
pub mod document;
pub mod mongodb;

pub use common::RetryConfig;
pub use document::{
    ConnectionStatus, DocumentError, DocumentResult, DocumentStore, Record, RecordId, StoreClient,
    StoreDiagnostics,
};
