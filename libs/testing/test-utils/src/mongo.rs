//! MongoDB test infrastructure
//!
//! Provides a `TestMongo` helper that creates a MongoDB container for testing.

use database::StoreClient;
use database::mongodb::{MongoConfig, MongoDocumentStore, open_store};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::mongo::Mongo;

/// Test MongoDB wrapper that ensures proper cleanup
///
/// The container is automatically stopped and removed when this struct is dropped.
///
/// # Example
///
/// ```no_run
/// use test_utils::TestMongo;
///
/// # async fn example() {
/// let mongo = TestMongo::new().await;
/// let client = mongo.client("shop_test").await;
/// let id = client.insert("product", Default::default()).await.unwrap();
/// # }
/// ```
pub struct TestMongo {
    #[allow(dead_code)]
    container: ContainerAsync<Mongo>,
    pub connection_string: String,
}

impl TestMongo {
    /// Create a new test MongoDB instance (MongoDB 7)
    pub async fn new() -> Self {
        let container = Mongo::default()
            .with_tag("7")
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let host_port = container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get MongoDB port");

        let connection_string = format!("mongodb://127.0.0.1:{}", host_port);

        tracing::info!(port = host_port, "Test MongoDB ready (mongo:7)");

        Self {
            container,
            connection_string,
        }
    }

    /// Connection settings for `database` with short timeouts
    pub fn config(&self, database: &str) -> MongoConfig {
        MongoConfig::new(self.connection_string.clone(), database).with_timeouts(5, 5)
    }

    /// Connected store for `database`
    pub async fn store(&self, database: &str) -> MongoDocumentStore {
        open_store(&self.config(database), None)
            .await
            .expect("Failed to connect to test MongoDB")
    }

    /// Configured [`StoreClient`] for `database`
    pub async fn client(&self, database: &str) -> StoreClient {
        StoreClient::new(self.store(database).await)
    }
}

impl Drop for TestMongo {
    fn drop(&mut self) {
        tracing::debug!("Cleaning up test MongoDB container");
    }
}
