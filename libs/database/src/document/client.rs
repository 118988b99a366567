use mongodb::bson::Document;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{instrument, warn};

use super::error::{DocumentError, DocumentResult};
use super::id::RecordId;
use super::record::{Record, to_fields};
use super::store::DocumentStore;

/// Collections listed by [`StoreClient::diagnose`]
const MAX_DIAGNOSTIC_COLLECTIONS: usize = 10;

/// Longest error text reported by [`StoreClient::diagnose`]
const MAX_DIAGNOSTIC_ERROR_CHARS: usize = 50;

/// Handle to the document store, possibly absent.
///
/// The process runs without a store when the database is not configured or
/// not reachable at startup. Every operation then fails with
/// [`DocumentError::Unavailable`] and callers decide how to degrade.
#[derive(Clone, Default)]
pub struct StoreClient {
    store: Option<Arc<dyn DocumentStore>>,
}

impl StoreClient {
    pub fn new(store: impl DocumentStore + 'static) -> Self {
        Self {
            store: Some(Arc::new(store)),
        }
    }

    /// A client with no backing store
    pub fn unconfigured() -> Self {
        Self { store: None }
    }

    pub fn is_configured(&self) -> bool {
        self.store.is_some()
    }

    fn store(&self) -> DocumentResult<&dyn DocumentStore> {
        self.store.as_deref().ok_or(DocumentError::Unavailable)
    }

    #[instrument(skip(self, fields))]
    pub async fn insert(&self, collection: &str, fields: Document) -> DocumentResult<RecordId> {
        self.store()?.insert(collection, fields).await
    }

    /// Serialize `value` and insert it, letting the store assign the id
    pub async fn insert_one<T: Serialize>(&self, collection: &str, value: &T) -> DocumentResult<RecordId> {
        let fields = to_fields(value)?;
        self.insert(collection, fields).await
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self, collection: &str) -> DocumentResult<Vec<Record>> {
        self.store()?.list_all(collection).await
    }

    /// Parse `id` and look the record up.
    ///
    /// A malformed id is rejected before the store is consulted, so it is
    /// reported as [`DocumentError::InvalidIdentifier`] even without a store.
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, collection: &str, id: &str) -> DocumentResult<Option<Record>> {
        let id = RecordId::parse(id)?;
        self.store()?.find_by_id(collection, id).await
    }

    #[instrument(skip(self))]
    pub async fn count(&self, collection: &str) -> DocumentResult<u64> {
        self.store()?.count(collection).await
    }

    pub async fn ping(&self) -> DocumentResult<()> {
        self.store()?.ping().await
    }

    /// Best-effort connection report. Never fails.
    pub async fn diagnose(&self) -> StoreDiagnostics {
        let Some(store) = self.store.as_deref() else {
            return StoreDiagnostics {
                database_name: None,
                status: ConnectionStatus::NotConfigured,
            };
        };

        let status = match store.collection_names().await {
            Ok(mut collections) => {
                collections.truncate(MAX_DIAGNOSTIC_COLLECTIONS);
                ConnectionStatus::Connected { collections }
            }
            Err(e) => {
                warn!(error = %e, "Store diagnostics could not list collections");
                ConnectionStatus::Degraded(truncate_chars(&e.detail(), MAX_DIAGNOSTIC_ERROR_CHARS))
            }
        };

        StoreDiagnostics {
            database_name: Some(store.database_name()),
            status,
        }
    }
}

impl fmt::Debug for StoreClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreClient")
            .field("database", &self.store.as_deref().map(|s| s.database_name()))
            .finish()
    }
}

/// Snapshot produced by [`StoreClient::diagnose`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreDiagnostics {
    pub database_name: Option<String>,
    pub status: ConnectionStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionStatus {
    NotConfigured,
    /// Reachable; holds at most the first ten collection names
    Connected { collections: Vec<String> },
    /// Configured but the probe failed; holds the shortened error text
    Degraded(String),
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::store::MockDocumentStore;
    use mongodb::bson::doc;

    fn mock_with_name() -> MockDocumentStore {
        let mut mock = MockDocumentStore::new();
        mock.expect_database_name().return_const("shop".to_string());
        mock
    }

    #[tokio::test]
    async fn test_unconfigured_operations_fail_unavailable() {
        let client = StoreClient::unconfigured();
        assert!(!client.is_configured());

        assert!(matches!(client.list_all("product").await, Err(DocumentError::Unavailable)));
        assert!(matches!(client.count("product").await, Err(DocumentError::Unavailable)));
        assert!(matches!(client.ping().await, Err(DocumentError::Unavailable)));
        assert!(matches!(
            client.insert("product", doc! { "title": "Mug" }).await,
            Err(DocumentError::Unavailable)
        ));
        assert!(matches!(
            client.find_by_id("product", "65a1f0c2e4b0a1b2c3d4e5f6").await,
            Err(DocumentError::Unavailable)
        ));
    }

    #[tokio::test]
    async fn test_find_by_id_rejects_malformed_id_before_store() {
        let unconfigured = StoreClient::unconfigured();
        assert!(matches!(
            unconfigured.find_by_id("product", "abc").await,
            Err(DocumentError::InvalidIdentifier(_))
        ));

        // The mock has no find_by_id expectation, so reaching it would panic
        let configured = StoreClient::new(MockDocumentStore::new());
        assert!(matches!(
            configured.find_by_id("product", "abc").await,
            Err(DocumentError::InvalidIdentifier(_))
        ));
    }

    #[tokio::test]
    async fn test_find_by_id_passes_parsed_id() {
        let id = RecordId::parse("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();

        let mut mock = MockDocumentStore::new();
        mock.expect_find_by_id()
            .withf(move |_, requested| *requested == id)
            .times(1)
            .returning(|_, id| Ok(Some(Record::new(id, doc! { "title": "Mug" }))));

        let client = StoreClient::new(mock);
        let record = client
            .find_by_id("product", "65a1f0c2e4b0a1b2c3d4e5f6")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.id, id);
    }

    #[tokio::test]
    async fn test_insert_one_strips_id_fields() {
        let assigned = RecordId::new();

        let mut mock = MockDocumentStore::new();
        mock.expect_insert()
            .withf(|_, fields| !fields.contains_key("id") && fields.contains_key("title"))
            .times(1)
            .returning(move |_, _| Ok(assigned));

        let client = StoreClient::new(mock);
        let id = client
            .insert_one("product", &serde_json::json!({ "id": "ignored", "title": "Mug" }))
            .await
            .unwrap();
        assert_eq!(id, assigned);
    }

    #[tokio::test]
    async fn test_diagnose_unconfigured() {
        let diagnostics = StoreClient::unconfigured().diagnose().await;
        assert_eq!(diagnostics.database_name, None);
        assert_eq!(diagnostics.status, ConnectionStatus::NotConfigured);
    }

    #[tokio::test]
    async fn test_diagnose_limits_collections() {
        let mut mock = mock_with_name();
        mock.expect_collection_names()
            .returning(|| Ok((0..15).map(|i| format!("c{i}")).collect()));

        let diagnostics = StoreClient::new(mock).diagnose().await;
        assert_eq!(diagnostics.database_name.as_deref(), Some("shop"));
        match diagnostics.status {
            ConnectionStatus::Connected { collections } => {
                assert_eq!(collections.len(), 10);
                assert_eq!(collections[0], "c0");
                assert_eq!(collections[9], "c9");
            }
            other => panic!("expected Connected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_diagnose_truncates_errors() {
        let mut mock = mock_with_name();
        mock.expect_collection_names()
            .returning(|| Err(DocumentError::Backend("x".repeat(200))));

        let diagnostics = StoreClient::new(mock).diagnose().await;
        match diagnostics.status {
            ConnectionStatus::Degraded(message) => {
                assert_eq!(message, "x".repeat(MAX_DIAGNOSTIC_ERROR_CHARS));
            }
            other => panic!("expected Degraded, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_diagnose_keeps_short_driver_message_verbatim() {
        let mut mock = mock_with_name();
        mock.expect_collection_names()
            .returning(|| Err(DocumentError::Backend("not authorized on shop".into())));

        let diagnostics = StoreClient::new(mock).diagnose().await;
        assert_eq!(
            diagnostics.status,
            ConnectionStatus::Degraded("not authorized on shop".to_string())
        );
    }

    #[test]
    fn test_truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("✅✅✅", 2), "✅✅");
        assert_eq!(truncate_chars("short", 50), "short");
    }
}
