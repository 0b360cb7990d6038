use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use products_client::ProductsError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;
use uuid::Uuid;

/// Error body returned to clients that asked for JSON
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Unique error ID for tracking
    pub error_id: String,
    pub error_type: String,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Products(#[from] ProductsError),

    /// The products service answered, but not with something we can act on
    #[error("Unexpected response from products service: {0}")]
    UnexpectedUpstream(String),

    #[error("Template registration error: {0}")]
    TemplateRegistration(#[from] Box<handlebars::TemplateError>),

    #[error("Template rendering error: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("No route for {0}")]
    PageNotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Configuration(err.to_string())
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Products(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            AppError::PageNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Products(ProductsError::NotFound { .. }) | AppError::PageNotFound(_) => "not_found",
            AppError::Products(ProductsError::Upstream { .. }) => "upstream_error",
            AppError::Products(ProductsError::MalformedResponse(_)) | AppError::UnexpectedUpstream(_) => {
                "malformed_upstream_response"
            }
            AppError::Products(ProductsError::Network(_)) => "network_error",
            AppError::Products(_) => "products_client_error",
            AppError::TemplateRegistration(_) | AppError::Render(_) => "template_error",
            AppError::Configuration(_) => "configuration_error",
        }
    }

    /// Message that is safe to show to the person paying
    pub fn public_message(&self) -> &'static str {
        if self.status_code() == StatusCode::NOT_FOUND {
            "Page not found"
        } else {
            "Sorry, we are experiencing technical problems"
        }
    }

    /// Log the error and return the id it was logged under
    pub fn log(&self) -> String {
        let error_id = Uuid::new_v4().to_string();
        let status_code = self.status_code();
        error!(
            error_id = %error_id,
            error_type = %self.error_type(),
            status_code = %status_code.as_u16(),
            upstream_status = ?self.upstream_status(),
            error = %self,
            "Request failed"
        );
        error_id
    }

    fn upstream_status(&self) -> Option<u16> {
        match self {
            AppError::Products(err) => err.error_code(),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_id = self.log();
        let body = ErrorResponse {
            error_id,
            error_type: self.error_type().to_string(),
            message: self.public_message().to_string(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}
