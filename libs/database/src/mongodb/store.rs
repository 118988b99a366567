use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Database;
use mongodb::bson::{Document, doc};
use tracing::{debug, instrument};

use crate::document::{DocumentError, DocumentResult, DocumentStore, Record, RecordId};

/// [`DocumentStore`] over a MongoDB database
#[derive(Clone, Debug)]
pub struct MongoDocumentStore {
    db: Database,
}

impl MongoDocumentStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection(&self, name: &str) -> mongodb::Collection<Document> {
        self.db.collection::<Document>(name)
    }
}

#[async_trait]
impl DocumentStore for MongoDocumentStore {
    fn database_name(&self) -> String {
        self.db.name().to_string()
    }

    #[instrument(skip(self, fields))]
    async fn insert(&self, collection: &str, fields: Document) -> DocumentResult<RecordId> {
        let result = self.collection(collection).insert_one(fields).await?;

        let id = result
            .inserted_id
            .as_object_id()
            .map(RecordId::from_object_id)
            .ok_or(DocumentError::MissingIdentifier)?;

        debug!(collection, %id, "Document inserted");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn list_all(&self, collection: &str) -> DocumentResult<Vec<Record>> {
        let cursor = self.collection(collection).find(doc! {}).await?;
        let docs: Vec<Document> = cursor.try_collect().await?;

        debug!(collection, count = docs.len(), "Documents listed");
        docs.into_iter().map(Record::from_document).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, collection: &str, id: RecordId) -> DocumentResult<Option<Record>> {
        self.collection(collection)
            .find_one(doc! { "_id": id.as_object_id() })
            .await?
            .map(Record::from_document)
            .transpose()
    }

    async fn count(&self, collection: &str) -> DocumentResult<u64> {
        Ok(self.collection(collection).count_documents(doc! {}).await?)
    }

    async fn collection_names(&self) -> DocumentResult<Vec<String>> {
        Ok(self.db.list_collection_names().await?)
    }

    async fn ping(&self) -> DocumentResult<()> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
