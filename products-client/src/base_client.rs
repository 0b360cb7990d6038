//! Thin JSON-over-HTTP layer shared by every products service call.

use std::time::{Duration, Instant};

use reqwest::{header, Client, Method, RequestBuilder, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{ProductsError, ProductsResult};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the products service
#[derive(Debug)]
pub struct ProductsClientConfig {
    /// Service root, without the `/v1/api` suffix
    pub base_url: String,
    pub api_token: SecretString,
    pub timeout: Duration,
}

impl ProductsClientConfig {
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: SecretString::new(api_token.into()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Authenticated JSON client bound to one service root
pub struct BaseClient {
    http: Client,
    api_root: String,
    token: SecretString,
    service: &'static str,
}

impl BaseClient {
    pub fn new(service: &'static str, config: ProductsClientConfig) -> ProductsResult<Self> {
        let root = Url::parse(&config.base_url)
            .map_err(|e| ProductsError::Config(format!("invalid {} url `{}`: {}", service, config.base_url, e)))?;
        if !matches!(root.scheme(), "http" | "https") {
            return Err(ProductsError::Config(format!(
                "{} url must be http or https, got `{}`",
                service,
                root.scheme()
            )));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProductsError::Config(format!("failed to build http client: {}", e)))?;

        Ok(Self {
            http,
            api_root: format!("{}/v1/api", config.base_url.trim_end_matches('/')),
            token: config.api_token,
            service,
        })
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    pub fn service(&self) -> &'static str {
        self.service
    }

    fn url(&self, path: &str) -> ProductsResult<Url> {
        let raw = format!("{}{}", self.api_root, path);
        Url::parse(&raw).map_err(|e| ProductsError::Config(format!("invalid request url `{}`: {}", raw, e)))
    }

    /// `GET {api_root}{path}?{query}` and decode the JSON answer
    pub async fn get<T>(&self, path: &str, query: &[(&str, &str)], description: &str) -> ProductsResult<T>
    where
        T: DeserializeOwned,
    {
        let mut url = self.url(path)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter());
        }
        let request = self.http.get(url.clone());
        self.execute(request, Method::GET, url, description).await
    }

    /// `POST {api_root}{path}` with a JSON body and decode the JSON answer
    pub async fn post<B, T>(&self, path: &str, body: &B, description: &str) -> ProductsResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        let request = self.http.post(url.clone()).json(body);
        self.execute(request, Method::POST, url, description).await
    }

    async fn execute<T>(&self, request: RequestBuilder, method: Method, url: Url, description: &str) -> ProductsResult<T>
    where
        T: DeserializeOwned,
    {
        let request_id = Uuid::new_v4().to_string();
        let started = Instant::now();

        debug!(
            service = self.service,
            method = %method,
            url = %url,
            request_id = %request_id,
            "Calling {} to {}",
            self.service,
            description
        );

        let response = request
            .bearer_auth(self.token.expose_secret())
            .header(header::ACCEPT, "application/json")
            .header(REQUEST_ID_HEADER, &request_id)
            .send()
            .await
            .map_err(|e| {
                logger_redacted::redacted_error!(
                    e.to_string(),
                    service = self.service,
                    method = %method,
                    url = %url,
                    request_id = %request_id,
                    "Calling {} to {} failed",
                    self.service,
                    description
                );
                ProductsError::Network(e)
            })?;

        let status = response.status();
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        info!(
            service = self.service,
            method = %method,
            url = %url,
            status = status.as_u16(),
            elapsed_ms,
            request_id = %request_id,
            "{} {} to {} completed",
            method,
            self.service,
            description
        );

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            logger_redacted::redacted_warn!(
                body,
                service = self.service,
                status = status.as_u16(),
                request_id = %request_id,
                "Products service rejected the call to {}",
                description
            );
            return Err(ProductsError::Upstream {
                status_code: status.as_u16(),
                description: description.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            ProductsError::MalformedResponse(format!("could not {}: {}", description, e))
        })
    }
}
