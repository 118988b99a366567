use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::DocumentError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found")]
    NotFound,

    #[error("Invalid product id: {0}")]
    InvalidId(String),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Database not configured")]
    StoreUnavailable,

    #[error("Database error: {0}")]
    Database(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound => AppError::NotFound("Product not found".to_string()),
            ProductError::InvalidId(_) => AppError::InvalidId("Invalid product id".to_string()),
            ProductError::Validation(e) => AppError::ValidationError(e),
            ProductError::StoreUnavailable => {
                AppError::DatabaseUnavailable("Database not configured".to_string())
            }
            ProductError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<DocumentError> for ProductError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::Unavailable => ProductError::StoreUnavailable,
            DocumentError::InvalidIdentifier(id) => ProductError::InvalidId(id),
            other => ProductError::Database(other.to_string()),
        }
    }
}
