//! Application state management.
//!
//! This module defines the shared application state passed to all request handlers.

use database::mongodb::{MongoConfig, open_store};
use database::{RetryConfig, StoreClient};
use tracing::{error, info, warn};

use crate::config::Config;

/// Shared application state.
///
/// Cloned for each handler; the store client shares one connection pool.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: Config,
    /// Document store handle, unconfigured when no database is available
    pub store: StoreClient,
}

/// Connect to the configured database, falling back to an unconfigured store.
///
/// A missing configuration or a database that stays unreachable after
/// retrying leaves the service running with store-backed routes degraded.
pub async fn connect_store(config: Option<&MongoConfig>, retry: Option<RetryConfig>) -> StoreClient {
    let Some(config) = config else {
        warn!("DATABASE_URL or DATABASE_NAME not set, running without a database");
        return StoreClient::unconfigured();
    };

    match open_store(config, retry).await {
        Ok(store) => {
            info!(database = %config.database, "Document store ready");
            StoreClient::new(store)
        }
        Err(e) => {
            error!(
                url = %config.redacted_url(),
                error = %e,
                "Could not connect to MongoDB, running without a database"
            );
            StoreClient::unconfigured()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_store_without_config() {
        let store = connect_store(None, None).await;
        assert!(!store.is_configured());
    }

    #[tokio::test]
    async fn test_connect_store_falls_back_when_unreachable() {
        let config = MongoConfig::new("mongodb://127.0.0.1:1", "shop").with_timeouts(1, 1);
        let store = connect_store(Some(&config), Some(RetryConfig::new().with_max_retries(0))).await;
        assert!(!store.is_configured());
    }
}
