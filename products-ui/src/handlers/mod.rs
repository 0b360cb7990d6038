pub mod health;
pub mod pay;
pub mod payment_status;

use axum::{
    extract::State,
    http::{HeaderMap, Uri},
    response::Response,
};

use crate::error::AppError;
use crate::server::ProductsUiServer;

/// Fallback for unknown routes
pub async fn not_found(State(server): State<ProductsUiServer>, headers: HeaderMap, uri: Uri) -> Response {
    server
        .views
        .error_response(&headers, AppError::PageNotFound(uri.path().to_string()))
}
