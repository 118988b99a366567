//! Storage-agnostic document access.
//!
//! Domain crates talk to [`StoreClient`] and never see BSON identifiers.

mod client;
mod error;
mod id;
mod record;
mod store;

pub use client::{ConnectionStatus, StoreClient, StoreDiagnostics};
pub use error::{DocumentError, DocumentResult};
pub use id::RecordId;
pub use mongodb::bson::{Document, doc};
pub use record::{Record, to_fields};
pub use store::DocumentStore;

#[cfg(test)]
pub(crate) use store::MockDocumentStore;
