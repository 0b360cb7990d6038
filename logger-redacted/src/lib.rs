//! Logging setup for the products UI with automatic credential redaction
//!
//! The products service is called with a long-lived bearer token and product
//! creation carries a GOV.UK Pay API key in its body. Neither may end up in
//! log output, so anything that logs raw upstream text goes through the
//! [`TokenRedactor`] first.
//!
//! # Key Features
//!
//! - **Bearer Redaction**: `Authorization: Bearer abc123` → `Bearer [REDACTED]`
//! - **Key Field Redaction**: `"pay_api_token":"abc"` → `"pay_api_token":"[REDACTED]"`
//! - **Fingerprints**: a short SHA-256 fingerprint lets operators tell two
//!   configured tokens apart without seeing either
//! - **Two Output Modes**: pretty output in development, flattened JSON with
//!   RFC 3339 timestamps everywhere else
//!
//! # Example
//!
//! ```rust,no_run
//! use logger_redacted::{init_tracing, LoggerConfig, redact};
//!
//! init_tracing(&LoggerConfig::default()).expect("subscriber installed once");
//!
//! tracing::warn!(detail = %redact("Authorization: Bearer abc123"), "upstream rejected call");
//! // detail = "Authorization: Bearer [REDACTED]"
//! ```

pub mod redactor;
pub mod macros;
pub mod config;

pub use redactor::*;
pub use config::*;

use thiserror::Error;
use tracing_subscriber::{
    fmt::{self, time::ChronoUtc},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Invalid log filter: {0}")]
    Filter(String),

    #[error("Tracing subscriber already installed: {0}")]
    AlreadyInitialized(String),
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `config.log_level` when it is set.
pub fn init_tracing(config: &LoggerConfig) -> Result<(), LoggerError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(config.filter_directive())
            .map_err(|e| LoggerError::Filter(e.to_string()))?,
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match config.format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.ansi)
                    .with_level(true),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .json()
                    .flatten_event(true),
            )
            .try_init(),
    };

    result.map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))
}
