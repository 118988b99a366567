//! Shop Lite HTTP service
//!
//! Products and orders over a MongoDB document store. The binary in
//! `main.rs` loads configuration and serves [`build_router`].

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;
use std::io;

use state::AppState;

/// Assemble every route with documentation and the shared middleware stack
pub fn build_router(state: &AppState) -> io::Result<Router> {
    axum_helpers::create_router::<openapi::ApiDoc>(api::root_routes(state), api::routes(state))
}
