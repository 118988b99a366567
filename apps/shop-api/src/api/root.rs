use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

/// Service banner
#[utoipa::path(
    get,
    path = "/",
    tag = "Service",
    responses((status = 200, description = "Service is running", body = MessageResponse))
)]
pub async fn index() -> Json<MessageResponse> {
    MessageResponse::new("Shop Lite Backend Running")
}

#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "Service",
    responses((status = 200, description = "Greeting", body = MessageResponse))
)]
pub async fn hello() -> Json<MessageResponse> {
    MessageResponse::new("Hello from the backend API!")
}
