//! In-process document store
//!
//! Behaves like the MongoDB store for everything the domains rely on:
//! identifiers are generated on insert, listing returns insertion order, and
//! unknown collections read as empty.

use async_trait::async_trait;
use database::document::Document;
use database::{DocumentError, DocumentResult, DocumentStore, Record, RecordId, StoreClient};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// [`DocumentStore`] kept in memory, shared between clones
#[derive(Clone, Debug)]
pub struct InMemoryDocumentStore {
    database: String,
    collections: Arc<RwLock<BTreeMap<String, Vec<Record>>>>,
    failure: Option<String>,
}

impl InMemoryDocumentStore {
    pub fn new(database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            collections: Arc::default(),
            failure: None,
        }
    }

    /// A store whose every operation fails with a backend error carrying `message`
    pub fn failing(database: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::new(database)
        }
    }

    /// Wrap a clone of this store in a [`StoreClient`]
    pub fn client(&self) -> StoreClient {
        StoreClient::new(self.clone())
    }

    /// Raw documents of `collection`, for assertions
    pub async fn documents(&self, collection: &str) -> Vec<Record> {
        self.collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    fn check(&self) -> DocumentResult<()> {
        match &self.failure {
            Some(message) => Err(DocumentError::Backend(message.clone())),
            None => Ok(()),
        }
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new("test")
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    fn database_name(&self) -> String {
        self.database.clone()
    }

    async fn insert(&self, collection: &str, fields: Document) -> DocumentResult<RecordId> {
        self.check()?;
        let id = RecordId::new();
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(Record::new(id, fields));
        Ok(id)
    }

    async fn list_all(&self, collection: &str) -> DocumentResult<Vec<Record>> {
        self.check()?;
        Ok(self.documents(collection).await)
    }

    async fn find_by_id(&self, collection: &str, id: RecordId) -> DocumentResult<Option<Record>> {
        self.check()?;
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .and_then(|records| records.iter().find(|record| record.id == id).cloned()))
    }

    async fn count(&self, collection: &str) -> DocumentResult<u64> {
        self.check()?;
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .map_or(0, |records| records.len() as u64))
    }

    async fn collection_names(&self) -> DocumentResult<Vec<String>> {
        self.check()?;
        Ok(self.collections.read().await.keys().cloned().collect())
    }

    async fn ping(&self) -> DocumentResult<()> {
        self.check()
    }
}
