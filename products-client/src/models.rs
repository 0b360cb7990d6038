use secrecy::SecretString;
use serde::Serialize;
use validator::Validate;

/// Hypermedia link attached to a product or payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
    pub method: String,
}

/// Product hosted by the products service
///
/// Prices are integer pence; display formatting happens in the UI only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub external_id: String,
    pub gateway_account_id: String,
    pub service_name: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub price: u64,
    pub return_url: Option<String>,
    pub self_link: Option<Link>,
    pub pay_link: Option<Link>,
}

/// One attempt to pay for a product (a charge on the payment gateway)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payment {
    pub external_id: String,
    pub product_external_id: Option<String>,
    pub amount: u64,
    /// Status as tracked by the products service
    pub status: Option<String>,
    /// Status reported by the payment gateway
    pub govuk_status: Option<String>,
    pub reference_number: Option<String>,
    pub next_url: Option<String>,
    pub links: Vec<Link>,
}

impl Payment {
    pub fn link(&self, rel: &str) -> Option<&Link> {
        self.links.iter().find(|link| link.rel == rel)
    }

    /// Where the user continues the payment, falling back to the `next` link
    pub fn next_url(&self) -> Option<&str> {
        self.next_url
            .as_deref()
            .or_else(|| self.link("next").map(|link| link.href.as_str()))
    }
}

/// Input of `create_product`
#[derive(Debug, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "gateway account id must not be empty"))]
    pub gateway_account_id: String,
    /// GOV.UK Pay API key used to initiate payments for the product
    pub pay_api_token: SecretString,
    #[validate(length(min = 1, message = "product name must not be empty"))]
    pub name: String,
    /// Price in pence
    pub price: u64,
    pub description: Option<String>,
    /// Where to send the user once a payment for this product completes
    #[validate(url(message = "return url must be a valid URL"))]
    pub return_url: Option<String>,
}

impl CreateProductRequest {
    pub fn new(
        gateway_account_id: impl Into<String>,
        pay_api_token: impl Into<String>,
        name: impl Into<String>,
        price: u64,
    ) -> Self {
        Self {
            gateway_account_id: gateway_account_id.into(),
            pay_api_token: SecretString::new(pay_api_token.into()),
            name: name.into(),
            price,
            description: None,
            return_url: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_return_url(mut self, return_url: impl Into<String>) -> Self {
        self.return_url = Some(return_url.into());
        self
    }
}
