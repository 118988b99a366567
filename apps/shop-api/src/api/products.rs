//! Products API routes
//!
//! This module wires up the products domain to HTTP routes.

use axum::Router;
use domain_products::{ProductService, StoreProductRepository, handlers};

use crate::state::AppState;

/// Create products router
pub fn router(state: &AppState) -> Router {
    let repository = StoreProductRepository::new(state.store.clone());
    let service = ProductService::new(repository);
    handlers::router(service)
}
