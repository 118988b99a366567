//! OpenAPI documentation configuration

use utoipa::OpenApi;

use crate::api::{diagnostics, root};

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shop Lite API",
        version = "0.1.0",
        description = "Products and orders backed by a MongoDB document store"
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(root::index, root::hello, diagnostics::diagnostics),
    components(schemas(root::MessageResponse, diagnostics::DiagnosticsResponse)),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc),
        (path = "/api/orders", api = domain_orders::ApiDoc)
    ),
    tags(
        (name = "Service", description = "Banner and diagnostics"),
        (name = "Products", description = "Product catalog endpoints"),
        (name = "Orders", description = "Order placement endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();

        for expected in [
            "/",
            "/api/hello",
            "/test",
            "/api/products",
            "/api/products/seed",
            "/api/products/{id}",
            "/api/orders",
        ] {
            assert!(paths.iter().any(|p| p == expected), "missing {expected} in {paths:?}");
        }
    }
}
