//! Process configuration, read once at startup.
//!
//! Values come from environment variables (a `.env` file is loaded first by
//! the binary). The products client receives its share explicitly through
//! [`AppConfig::products_client_config`]; nothing below the binary reads the
//! environment.

use std::time::Duration;

use products_client::ProductsClientConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::error::AppError;

fn default_timeout_secs() -> u64 {
    30
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

#[derive(Deserialize)]
struct RawConfig {
    products_url: String,
    products_api_token: String,
    #[serde(default = "default_timeout_secs")]
    products_timeout_secs: u64,
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default = "default_log_level")]
    log_level: String,
    #[serde(default = "default_environment")]
    products_ui_env: String,
}

#[derive(Debug)]
pub struct AppConfig {
    /// `PRODUCTS_URL`
    pub products_url: String,
    /// `PRODUCTS_API_TOKEN`
    pub products_api_token: SecretString,
    /// `PRODUCTS_TIMEOUT_SECS`
    pub products_timeout: Duration,
    pub host: String,
    pub port: u16,
    pub log_level: String,
    /// `PRODUCTS_UI_ENV`: `development` or anything else for JSON logs
    pub environment: String,
}

impl AppConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_source(config::Environment::default().try_parsing(true))
    }

    /// Load from any `config` source, e.g. an `Environment` over a fixed map
    pub fn from_source<S>(source: S) -> Result<Self, AppError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let raw: RawConfig = config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;

        if raw.products_url.trim().is_empty() {
            return Err(AppError::Configuration("PRODUCTS_URL must not be empty".to_string()));
        }
        if raw.products_api_token.trim().is_empty() {
            return Err(AppError::Configuration("PRODUCTS_API_TOKEN must not be empty".to_string()));
        }

        Ok(Self {
            products_url: raw.products_url,
            products_api_token: SecretString::new(raw.products_api_token),
            products_timeout: Duration::from_secs(raw.products_timeout_secs),
            host: raw.host,
            port: raw.port,
            log_level: raw.log_level,
            environment: raw.products_ui_env,
        })
    }

    pub fn products_client_config(&self) -> ProductsClientConfig {
        ProductsClientConfig::new(
            self.products_url.clone(),
            self.products_api_token.expose_secret().clone(),
        )
        .with_timeout(self.products_timeout)
    }
}
