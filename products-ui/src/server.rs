use std::sync::Arc;

use products_client::{ProductsApi, ProductsClient};

use crate::error::AppError;
use crate::settings::AppConfig;
use crate::views::Views;

/// Shared, immutable request state
#[derive(Clone)]
pub struct ProductsUiServer {
    pub products: Arc<dyn ProductsApi>,
    pub views: Arc<Views>,
}

impl ProductsUiServer {
    /// Build the server with an HTTP products client from configuration
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let client = ProductsClient::new(config.products_client_config())?;
        Self::with_client(Arc::new(client))
    }

    /// Build the server around any [`ProductsApi`] implementation
    pub fn with_client(products: Arc<dyn ProductsApi>) -> Result<Self, AppError> {
        Ok(Self {
            products,
            views: Arc::new(Views::new()?),
        })
    }
}
