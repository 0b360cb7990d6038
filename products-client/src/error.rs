use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProductsError {
    /// Non-2xx answer from the products service
    #[error("Products service returned {status_code} while trying to {description}")]
    Upstream { status_code: u16, description: String },

    #[error("{resource} not found: {external_id}")]
    NotFound {
        resource: &'static str,
        external_id: String,
    },

    #[error("Malformed response from products service: {0}")]
    MalformedResponse(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ProductsError {
    /// HTTP status reported by the products service, if the call got that far
    pub fn error_code(&self) -> Option<u16> {
        match self {
            ProductsError::Upstream { status_code, .. } => Some(*status_code),
            ProductsError::NotFound { .. } => Some(404),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ProductsError::NotFound { .. })
    }

    /// Turn a 404 into [`ProductsError::NotFound`] for a by-id lookup
    pub(crate) fn not_found_for(self, resource: &'static str, external_id: &str) -> Self {
        match self {
            ProductsError::Upstream { status_code: 404, .. } => ProductsError::NotFound {
                resource,
                external_id: external_id.to_string(),
            },
            other => other,
        }
    }
}

pub type ProductsResult<T> = Result<T, ProductsError>;
