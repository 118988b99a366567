//! Shared test utilities for domain testing
//!
//! This crate provides reusable test infrastructure for all domain crates:
//! - `InMemoryDocumentStore`: document store kept in process memory (always available)
//! - `TestMongo`: MongoDB container with automatic cleanup (feature: "mongo")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! # Features
//!
//! - `mongo` (default): Enables MongoDB container test infrastructure
//!
//! # Usage
//!
//! ## In-memory store
//!
//! ```rust,no_run
//! use test_utils::{InMemoryDocumentStore, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_handler_test() {
//!     let store = InMemoryDocumentStore::new("shop_test");
//!     let client = store.client();
//!     let builder = TestDataBuilder::from_test_name("my_handler_test");
//!
//!     let title = builder.name("product", "main");
//! }
//! ```
//!
//! ## MongoDB Testing
//!
//! ```rust,ignore
//! use test_utils::TestMongo;
//!
//! #[tokio::test]
//! #[ignore] // Requires Docker
//! async fn my_mongo_test() {
//!     let mongo = TestMongo::new().await;
//!     let client = mongo.client("shop_test").await;
//!     assert!(client.list_all("product").await.unwrap().is_empty());
//! }
//! ```

mod memory;

#[cfg(feature = "mongo")]
mod mongo;

pub use memory::InMemoryDocumentStore;

#[cfg(feature = "mongo")]
pub use mongo::TestMongo;

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded random data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// This is the recommended way to create a builder for consistent test data.
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_product");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Well-formed record identifier (24 hex characters) derived from the seed
    ///
    /// Useful for lookups that must miss: nothing in a fresh store carries it.
    pub fn record_id(&self) -> String {
        format!("{:016x}{:08x}", self.seed, self.seed as u32)
    }

    /// Generate a unique name for testing
    ///
    /// # Arguments
    ///
    /// * `prefix` - The type of resource (e.g., "product", "customer")
    /// * `suffix` - A unique identifier within the test (e.g., "main", "backup")
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("my_test");
    /// let name = builder.name("product", "main");
    /// // Returns: "test-product-12345-main"
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Deterministic customer email
    pub fn email(&self, local: &str) -> String {
        format!("{}+{}@example.com", local, self.seed)
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that a string is a 24 character lowercase hex record identifier
    pub fn assert_record_id(value: &str, context: &str) {
        assert!(
            value.len() == 24 && value.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')),
            "{}: expected 24 hex characters, got {:?}",
            context,
            value
        );
    }

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }
}
