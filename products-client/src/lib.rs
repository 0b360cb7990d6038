//! Products Service Client
//!
//! Typed access to the products microservice, which stores product
//! definitions and the payments taken against them:
//! - Product creation and lookup (by external id or gateway account)
//! - Payment creation, with an optional one-off price override
//! - Payment lookup (by external id or owning product)
//!
//! Every call is a single authenticated HTTP request against
//! `{base_url}/v1/api`. Failures are never retried; the caller decides what a
//! given [`ProductsError`] means for the user.
//!
//! ```rust,no_run
//! use products_client::{CreateProductRequest, ProductsApi, ProductsClient, ProductsClientConfig};
//!
//! # async fn run() -> products_client::ProductsResult<()> {
//! let client = ProductsClient::new(ProductsClientConfig::new("http://localhost:18000", "api-token"))?;
//!
//! let product = client
//!     .create_product(&CreateProductRequest::new("42", "pay-api-key", "Parking permit", 2500))
//!     .await?;
//! let payment = client.create_payment(&product.external_id, None).await?;
//! println!("continue at {:?}", payment.next_url());
//! # Ok(())
//! # }
//! ```

pub mod base_client;
pub mod client;
pub mod error;
pub mod models;
pub mod wire;

pub use base_client::{BaseClient, ProductsClientConfig, REQUEST_ID_HEADER};
pub use client::*;
pub use error::*;
pub use models::*;
