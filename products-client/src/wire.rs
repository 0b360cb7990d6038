//! JSON shapes exchanged with the products service.
//!
//! Responses are deserialized into these loose schemas first and then checked
//! into the domain models, so a missing field surfaces as
//! [`ProductsError::MalformedResponse`] instead of a half-built model.

use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::error::{ProductsError, ProductsResult};
use crate::models::{CreateProductRequest, Link, Payment, Product};

/// Identifiers that some service versions send as numbers
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Text(String),
    Number(i64),
}

impl From<WireId> for String {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Text(text) => text,
            WireId::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LinkResponse {
    pub rel: Option<String>,
    pub href: Option<String>,
    pub method: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProductResponse {
    pub external_id: Option<String>,
    /// Older service versions name the product id this way
    pub external_service_id: Option<String>,
    pub gateway_account_id: Option<WireId>,
    pub service_name: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<u64>,
    pub return_url: Option<String>,
    #[serde(rename = "_links")]
    pub links: Option<Vec<LinkResponse>>,
}

#[derive(Debug, Deserialize)]
pub struct PaymentResponse {
    pub external_id: Option<String>,
    pub product_external_id: Option<String>,
    pub amount: Option<u64>,
    pub status: Option<String>,
    pub govuk_status: Option<String>,
    pub reference_number: Option<String>,
    pub next_url: Option<String>,
    #[serde(rename = "_links")]
    pub links: Option<Vec<LinkResponse>>,
}

#[derive(Debug, Serialize)]
pub struct CreateProductBody<'a> {
    pub gateway_account_id: &'a str,
    pub pay_api_token: &'a str,
    pub name: &'a str,
    pub price: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<&'a str>,
}

impl<'a> From<&'a CreateProductRequest> for CreateProductBody<'a> {
    fn from(request: &'a CreateProductRequest) -> Self {
        Self {
            gateway_account_id: &request.gateway_account_id,
            pay_api_token: request.pay_api_token.expose_secret(),
            name: &request.name,
            price: request.price,
            description: request.description.as_deref(),
            return_url: request.return_url.as_deref(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatePaymentBody<'a> {
    pub external_product_id: &'a str,
    /// Overrides the product price for this payment only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
}

fn required<T>(value: Option<T>, resource: &str, field: &str) -> ProductsResult<T> {
    value.ok_or_else(|| {
        ProductsError::MalformedResponse(format!("{} is missing required field `{}`", resource, field))
    })
}

fn required_text(value: Option<String>, resource: &str, field: &str) -> ProductsResult<String> {
    let text = required(value, resource, field)?;
    if text.trim().is_empty() {
        return Err(ProductsError::MalformedResponse(format!(
            "{} has an empty `{}`",
            resource, field
        )));
    }
    Ok(text)
}

impl TryFrom<LinkResponse> for Link {
    type Error = ProductsError;

    fn try_from(link: LinkResponse) -> ProductsResult<Self> {
        Ok(Link {
            rel: required(link.rel, "link", "rel")?,
            href: required(link.href, "link", "href")?,
            method: link.method.unwrap_or_else(|| "GET".to_string()),
        })
    }
}

fn convert_links(links: Option<Vec<LinkResponse>>) -> ProductsResult<Vec<Link>> {
    links
        .unwrap_or_default()
        .into_iter()
        .map(Link::try_from)
        .collect()
}

impl TryFrom<ProductResponse> for Product {
    type Error = ProductsError;

    fn try_from(response: ProductResponse) -> ProductsResult<Self> {
        let mut links = convert_links(response.links)?;
        let take = |links: &mut Vec<Link>, rel: &str| {
            links
                .iter()
                .position(|link| link.rel == rel)
                .map(|index| links.remove(index))
        };
        let self_link = take(&mut links, "self");
        let pay_link = take(&mut links, "pay");

        Ok(Product {
            external_id: required_text(
                response.external_id.or(response.external_service_id),
                "product",
                "external_id",
            )?,
            gateway_account_id: required(response.gateway_account_id, "product", "gateway_account_id")?.into(),
            service_name: response.service_name,
            name: required_text(response.name, "product", "name")?,
            description: response.description,
            price: required(response.price, "product", "price")?,
            return_url: response.return_url,
            self_link,
            pay_link,
        })
    }
}

impl TryFrom<PaymentResponse> for Payment {
    type Error = ProductsError;

    fn try_from(response: PaymentResponse) -> ProductsResult<Self> {
        Ok(Payment {
            external_id: required_text(response.external_id, "payment", "external_id")?,
            product_external_id: response.product_external_id,
            amount: required(response.amount, "payment", "amount")?,
            status: response.status,
            govuk_status: response.govuk_status,
            reference_number: response.reference_number,
            next_url: response.next_url,
            links: convert_links(response.links)?,
        })
    }
}
