//! `/test` endpoint: best-effort report on the document store

use axum::{Json, Router, extract::State, routing::get};
use database::{ConnectionStatus, StoreDiagnostics};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::DatabaseEnv;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiagnosticsResponse {
    #[schema(example = "✅ Running")]
    pub backend: String,
    #[schema(example = "✅ Connected & Working")]
    pub database: String,
    #[schema(example = "✅ Set")]
    pub database_url: String,
    #[schema(example = "✅ Set")]
    pub database_name: String,
    #[schema(example = "Connected")]
    pub connection_status: String,
    /// At most ten collection names
    pub collections: Vec<String>,
}

impl DiagnosticsResponse {
    pub fn new(diagnostics: StoreDiagnostics, env: DatabaseEnv) -> Self {
        let (database, connection_status, collections) = match diagnostics.status {
            ConnectionStatus::NotConfigured => ("❌ Not Available".to_string(), "Not Connected", Vec::new()),
            ConnectionStatus::Connected { collections } => {
                ("✅ Connected & Working".to_string(), "Connected", collections)
            }
            ConnectionStatus::Degraded(error) => {
                (format!("⚠️  Connected but Error: {error}"), "Connected", Vec::new())
            }
        };

        Self {
            backend: "✅ Running".to_string(),
            database,
            database_url: set_marker(env.url_set),
            database_name: set_marker(env.name_set),
            connection_status: connection_status.to_string(),
            collections,
        }
    }
}

fn set_marker(set: bool) -> String {
    let marker = if set { "✅ Set" } else { "❌ Not Set" };
    marker.to_string()
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/test", get(diagnostics))
        .with_state(state)
}

/// Report backend and database status. Never fails.
#[utoipa::path(
    get,
    path = "/test",
    tag = "Service",
    responses((status = 200, description = "Diagnostic snapshot", body = DiagnosticsResponse))
)]
pub async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let diagnostics = state.store.diagnose().await;
    Json(DiagnosticsResponse::new(diagnostics, state.config.database_env))
}
