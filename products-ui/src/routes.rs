pub mod paths;

use axum::{routing::get, Router};

use crate::handlers::{health, pay, payment_status};
use crate::server::ProductsUiServer;

/// Create all application routes
pub fn create_routes() -> Router<ProductsUiServer> {
    Router::new()
        .route(paths::HEALTHCHECK, get(health::healthcheck))
        .route(paths::pay::PRODUCT, get(pay::make_payment))
        .route(paths::pay::COMPLETE, get(payment_status::payment_complete))
        .fallback(crate::handlers::not_found)
}
