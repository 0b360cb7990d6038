use axum::{
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Json, Response},
};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::warn;

use crate::error::AppError;

pub const CONFIRMATION_VIEW: &str = "pay/confirmation";
pub const FAILED_VIEW: &str = "pay/failed";
pub const ERROR_VIEW: &str = "error";

const TEMPLATES: [(&str, &str); 4] = [
    ("layout", include_str!("../templates/layout.hbs")),
    (CONFIRMATION_VIEW, include_str!("../templates/pay/confirmation.hbs")),
    (FAILED_VIEW, include_str!("../templates/pay/failed.hbs")),
    (ERROR_VIEW, include_str!("../templates/error.hbs")),
];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorView<'a> {
    message: &'a str,
    error_id: &'a str,
}

/// Handlebars registry of the embedded page templates
pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    pub fn new() -> Result<Self, AppError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);

        for (name, source) in TEMPLATES {
            registry
                .register_template_string(name, source)
                .map_err(Box::new)?;
        }

        Ok(Self { registry })
    }

    pub fn render<T: Serialize>(&self, view: &str, data: &T) -> Result<String, AppError> {
        Ok(self.registry.render(view, data)?)
    }

    /// Render `view` as HTML, or return `data` itself when the caller asked for JSON
    pub fn respond<T: Serialize>(&self, headers: &HeaderMap, view: &str, data: &T) -> Result<Response, AppError> {
        if wants_json(headers) {
            return Ok(Json(data).into_response());
        }
        Ok(Html(self.render(view, data)?).into_response())
    }

    /// Error page for a failed request, falling back to the JSON error body
    pub fn error_response(&self, headers: &HeaderMap, err: AppError) -> Response {
        if wants_json(headers) {
            return err.into_response();
        }

        let error_id = err.log();
        let data = ErrorView {
            message: err.public_message(),
            error_id: &error_id,
        };

        match self.render(ERROR_VIEW, &data) {
            Ok(page) => (err.status_code(), Html(page)).into_response(),
            Err(render_err) => {
                warn!(error = %render_err, "Could not render error page");
                err.into_response()
            }
        }
    }
}

/// True when the Accept header lists `application/json`
pub fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::ACCEPT)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .any(|media| {
            media
                .split(';')
                .next()
                .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
                .unwrap_or(false)
        })
}
