use async_trait::async_trait;
use mongodb::bson::Document;

use super::error::DocumentResult;
use super::id::RecordId;
use super::record::Record;

/// Storage backend behind [`StoreClient`](super::StoreClient).
///
/// Implementations assign identifiers on insert and return records in the
/// backend's natural order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Name of the database this store writes to
    fn database_name(&self) -> String;

    /// Store `fields` as a new document and return its assigned id
    async fn insert(&self, collection: &str, fields: Document) -> DocumentResult<RecordId>;

    /// Every document in `collection`
    async fn list_all(&self, collection: &str) -> DocumentResult<Vec<Record>>;

    /// Look up a single document
    async fn find_by_id(&self, collection: &str, id: RecordId) -> DocumentResult<Option<Record>>;

    /// Number of documents in `collection`
    async fn count(&self, collection: &str) -> DocumentResult<u64>;

    /// Names of the collections in the database
    async fn collection_names(&self) -> DocumentResult<Vec<String>>;

    /// Round-trip to the backend
    async fn ping(&self) -> DocumentResult<()>;
}
