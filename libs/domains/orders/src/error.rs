use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::DocumentError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Database not configured")]
    StoreUnavailable,

    #[error("Database error: {0}")]
    Database(String),
}

pub type OrderResult<T> = Result<T, OrderError>;

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::Validation(e) => AppError::ValidationError(e),
            OrderError::StoreUnavailable => {
                AppError::DatabaseUnavailable("Database not configured".to_string())
            }
            OrderError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

impl From<DocumentError> for OrderError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::Unavailable => OrderError::StoreUnavailable,
            other => OrderError::Database(other.to_string()),
        }
    }
}
