//! API routes module
//!
//! Root routes are served as-is; [`routes`] is nested under `/api` by
//! `axum_helpers::create_router`.

pub mod diagnostics;
pub mod health;
pub mod orders;
pub mod products;
pub mod root;

use axum::{Router, routing::get};
use axum_helpers::server::health_router;

use crate::state::AppState;

/// Banner, diagnostics and probes
pub fn root_routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(root::index))
        .merge(diagnostics::router(state.clone()))
        .merge(health::router(state.clone()))
        .merge(health_router(state.config.app))
}

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .route("/hello", get(root::hello))
        .nest("/products", products::router(state))
        .nest("/orders", orders::router(state))
}
