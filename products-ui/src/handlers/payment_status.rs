use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Response,
};
use products_client::{Payment, Product};
use serde::Serialize;

use crate::error::AppError;
use crate::routes::paths;
use crate::server::ProductsUiServer;
use crate::utils::{as_gbp, beautify};
use crate::views::{CONFIRMATION_VIEW, FAILED_VIEW};

const SUCCESS_STATUS: &str = "success";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentSummary {
    pub reference: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationData {
    pub current_service_name: String,
    pub payment: PaymentSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedData {
    pub current_service_name: String,
    pub back_to_start_page: String,
}

/// Page shown once the user returns from the payment gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PaymentStatusView {
    Confirmation(ConfirmationData),
    Failed(FailedData),
}

impl PaymentStatusView {
    pub fn template(&self) -> &'static str {
        match self {
            PaymentStatusView::Confirmation(_) => CONFIRMATION_VIEW,
            PaymentStatusView::Failed(_) => FAILED_VIEW,
        }
    }
}

fn is_successful(payment: &Payment) -> bool {
    payment
        .govuk_status
        .as_deref()
        .map(str::to_lowercase)
        .is_some_and(|status| status == SUCCESS_STATUS)
}

/// Pick the status page for an already resolved product and payment
pub fn payment_status(product: &Product, payment: &Payment) -> PaymentStatusView {
    let current_service_name = product.service_name.clone().unwrap_or_default();

    if is_successful(payment) {
        PaymentStatusView::Confirmation(ConfirmationData {
            current_service_name,
            payment: PaymentSummary {
                reference: beautify(payment.reference_number.as_deref().unwrap_or_default()),
                amount: as_gbp(payment.amount),
            },
        })
    } else {
        PaymentStatusView::Failed(FailedData {
            current_service_name,
            back_to_start_page: paths::pay::product_url(&product.external_id),
        })
    }
}

async fn resolve_and_render(
    server: &ProductsUiServer,
    headers: &HeaderMap,
    payment_external_id: &str,
) -> Result<Response, AppError> {
    let payment = server
        .products
        .get_payment_by_payment_external_id(payment_external_id)
        .await?;

    let product_external_id = payment.product_external_id.as_deref().ok_or_else(|| {
        AppError::UnexpectedUpstream(format!("payment {} has no product", payment.external_id))
    })?;
    let product = server
        .products
        .get_product_by_external_id(product_external_id)
        .await?;

    let view = payment_status(&product, &payment);
    server.views.respond(headers, view.template(), &view)
}

/// `GET /payment-complete/:paymentExternalId`
pub async fn payment_complete(
    State(server): State<ProductsUiServer>,
    headers: HeaderMap,
    Path(payment_external_id): Path<String>,
) -> Response {
    match resolve_and_render(&server, &headers, &payment_external_id).await {
        Ok(response) => response,
        Err(err) => server.views.error_response(&headers, err),
    }
}
