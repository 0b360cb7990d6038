use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
};
use tracing::info;

use crate::error::AppError;
use crate::server::ProductsUiServer;

async fn start_payment(server: &ProductsUiServer, product_external_id: &str) -> Result<Redirect, AppError> {
    let product = server
        .products
        .get_product_by_external_id(product_external_id)
        .await?;
    let payment = server.products.create_payment(&product.external_id, None).await?;

    let next_url = payment.next_url().ok_or_else(|| {
        AppError::UnexpectedUpstream(format!("payment {} has no next url", payment.external_id))
    })?;

    info!(
        product_external_id = %product.external_id,
        payment_external_id = %payment.external_id,
        amount = payment.amount,
        "Payment created, sending user to the gateway"
    );
    Ok(Redirect::to(next_url))
}

/// `GET /pay/:productExternalId`: create a payment and hand over to the gateway
pub async fn make_payment(
    State(server): State<ProductsUiServer>,
    headers: HeaderMap,
    Path(product_external_id): Path<String>,
) -> Response {
    match start_payment(&server, &product_external_id).await {
        Ok(redirect) => redirect.into_response(),
        Err(err) => server.views.error_response(&headers, err),
    }
}
