use async_trait::async_trait;
use tracing::instrument;
use validator::Validate;

use crate::base_client::{BaseClient, ProductsClientConfig};
use crate::error::{ProductsError, ProductsResult};
use crate::models::{CreateProductRequest, Payment, Product};
use crate::wire::{CreatePaymentBody, CreateProductBody, PaymentResponse, ProductResponse};

pub const SERVICE_NAME: &str = "products";

/// Domain operations offered by the products service
#[async_trait]
pub trait ProductsApi: Send + Sync {
    async fn create_product(&self, request: &CreateProductRequest) -> ProductsResult<Product>;

    async fn get_product_by_external_id(&self, product_external_id: &str) -> ProductsResult<Product>;

    async fn get_products_by_gateway_account_id(&self, gateway_account_id: &str) -> ProductsResult<Vec<Product>>;

    /// `price_override` replaces the product price for this payment only
    async fn create_payment(&self, product_external_id: &str, price_override: Option<u64>) -> ProductsResult<Payment>;

    async fn get_payment_by_payment_external_id(&self, payment_external_id: &str) -> ProductsResult<Payment>;

    async fn get_payments_by_product_external_id(&self, product_external_id: &str) -> ProductsResult<Vec<Payment>>;
}

/// HTTP implementation of [`ProductsApi`]
pub struct ProductsClient {
    base: BaseClient,
}

impl ProductsClient {
    pub fn new(config: ProductsClientConfig) -> ProductsResult<Self> {
        Ok(Self {
            base: BaseClient::new(SERVICE_NAME, config)?,
        })
    }

    pub fn api_root(&self) -> &str {
        self.base.api_root()
    }
}

fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

fn into_products(responses: Vec<ProductResponse>) -> ProductsResult<Vec<Product>> {
    responses.into_iter().map(Product::try_from).collect()
}

fn into_payments(responses: Vec<PaymentResponse>) -> ProductsResult<Vec<Payment>> {
    responses.into_iter().map(Payment::try_from).collect()
}

#[async_trait]
impl ProductsApi for ProductsClient {
    #[instrument(skip(self, request), fields(gateway_account_id = %request.gateway_account_id))]
    async fn create_product(&self, request: &CreateProductRequest) -> ProductsResult<Product> {
        request
            .validate()
            .map_err(|e| ProductsError::InvalidRequest(e.to_string()))?;

        let response: ProductResponse = self
            .base
            .post("/products", &CreateProductBody::from(request), "create a product for a service")
            .await?;
        Product::try_from(response)
    }

    #[instrument(skip(self))]
    async fn get_product_by_external_id(&self, product_external_id: &str) -> ProductsResult<Product> {
        let response: ProductResponse = self
            .base
            .get(
                &format!("/products/{}", segment(product_external_id)),
                &[],
                "find a product by it's external id",
            )
            .await
            .map_err(|e| e.not_found_for("Product", product_external_id))?;
        Product::try_from(response)
    }

    #[instrument(skip(self))]
    async fn get_products_by_gateway_account_id(&self, gateway_account_id: &str) -> ProductsResult<Vec<Product>> {
        let responses: Vec<ProductResponse> = self
            .base
            .get(
                "/products",
                &[("gatewayAccountId", gateway_account_id)],
                "find a list products associated with a gateway account",
            )
            .await?;
        into_products(responses)
    }

    #[instrument(skip(self))]
    async fn create_payment(&self, product_external_id: &str, price_override: Option<u64>) -> ProductsResult<Payment> {
        let body = CreatePaymentBody {
            external_product_id: product_external_id,
            amount: price_override,
        };
        let response: PaymentResponse = self
            .base
            .post("/payments", &body, "create a payment for a product")
            .await?;
        Payment::try_from(response)
    }

    #[instrument(skip(self))]
    async fn get_payment_by_payment_external_id(&self, payment_external_id: &str) -> ProductsResult<Payment> {
        let response: PaymentResponse = self
            .base
            .get(
                &format!("/payments/{}", segment(payment_external_id)),
                &[],
                "find a payment by it's external id",
            )
            .await
            .map_err(|e| e.not_found_for("Payment", payment_external_id))?;
        Payment::try_from(response)
    }

    #[instrument(skip(self))]
    async fn get_payments_by_product_external_id(&self, product_external_id: &str) -> ProductsResult<Vec<Payment>> {
        let responses: Vec<PaymentResponse> = self
            .base
            .get(
                &format!("/products/{}/payments", segment(product_external_id)),
                &[],
                "find payments associated with a particular product",
            )
            .await?;
        into_payments(responses)
    }
}
