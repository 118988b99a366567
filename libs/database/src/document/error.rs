use thiserror::Error;

/// Failures surfaced by the document store adapter
#[derive(Debug, Error)]
pub enum DocumentError {
    /// No store is configured, or the configured store was never reached
    #[error("Database not configured")]
    Unavailable,

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Stored document has no identifier")]
    MissingIdentifier,

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Database error: {0}")]
    Backend(String),
}

pub type DocumentResult<T> = Result<T, DocumentError>;

impl DocumentError {
    /// The underlying message without the variant's prefix
    pub fn detail(&self) -> String {
        match self {
            DocumentError::InvalidIdentifier(msg)
            | DocumentError::Serialization(msg)
            | DocumentError::Backend(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl From<mongodb::error::Error> for DocumentError {
    fn from(err: mongodb::error::Error) -> Self {
        DocumentError::Backend(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for DocumentError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        DocumentError::Serialization(err.to_string())
    }
}

impl From<mongodb::bson::de::Error> for DocumentError {
    fn from(err: mongodb::bson::de::Error) -> Self {
        DocumentError::Serialization(err.to_string())
    }
}
