//! Products UI - payment pages for products hosted by the products service
//!
//! Resolves products and payments through [`products_client`] and renders
//! the pages a paying user sees: the hand-over to the payment gateway and the
//! confirmation or failure page once they come back.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod settings;
pub mod utils;
pub mod views;

pub use error::*;
pub use server::ProductsUiServer;
pub use settings::AppConfig;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Create the main application router with all routes and middleware
pub fn create_app(server: ProductsUiServer) -> Router {
    routes::create_routes()
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(server)
}
