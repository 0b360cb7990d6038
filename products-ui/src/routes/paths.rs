//! Route path constants shared by the router and by handlers that build links.

pub const HEALTHCHECK: &str = "/healthcheck";

/// Payment journey pages
pub mod pay {
    pub const PRODUCT_EXTERNAL_ID: &str = ":productExternalId";

    /// Start paying for a product
    pub const PRODUCT: &str = "/pay/:productExternalId";
    /// Landing page after the payment gateway hands the user back
    pub const COMPLETE: &str = "/payment-complete/:paymentExternalId";

    /// Link to the start page of `product_external_id`
    pub fn product_url(product_external_id: &str) -> String {
        PRODUCT.replace(PRODUCT_EXTERNAL_ID, &urlencoding::encode(product_external_id))
    }
}
