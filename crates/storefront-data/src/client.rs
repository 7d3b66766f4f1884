//! HTTP client for the product service.

use std::time::Duration;

use serde::Deserialize;
use storefront_commerce::{FilterParams, Product};

use crate::retry::RetryPolicy;

/// Error type for fetch operations.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("product service returned {status} for {url}")]
    Http { status: u16, url: String },

    #[error("product service did not answer within {0:?}")]
    Timeout(Duration),

    #[error("could not reach product service: {0}")]
    Connection(String),

    #[error("malformed product payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("request failed: {0}")]
    Request(String),
}

/// Fetch policy combining deadline and retry configuration.
#[derive(Debug, Clone)]
pub struct FetchPolicy {
    /// Total deadline per attempt.
    pub timeout: Duration,
    /// Retry policy across attempts.
    pub retry: RetryPolicy,
}

impl FetchPolicy {
    pub fn new(timeout: Duration, retry: RetryPolicy) -> Self {
        Self { timeout, retry }
    }
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(3),
            retry: RetryPolicy::default(),
        }
    }
}

/// Wire shape of the product listing endpoint.
#[derive(Debug, Deserialize)]
struct ProductsPayload {
    products: Vec<Product>,
}

/// Client for the remote product service.
///
/// One endpoint matters: `GET {base_url}/products`, with the active filter
/// fields as query parameters. An empty parameter set asks for the full
/// browse listing; the service returns the complete result set in one
/// response, so there is no pagination here.
pub struct ProductClient {
    http: reqwest::Client,
    products_url: String,
    policy: FetchPolicy,
}

impl ProductClient {
    /// Create a client for the service at `base_url`.
    pub fn new(base_url: &str, policy: FetchPolicy) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(policy.timeout)
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;

        Ok(Self {
            http,
            products_url: format!("{}/products", base_url.trim_end_matches('/')),
            policy,
        })
    }

    /// Fetch all products matching `params`, honoring the retry policy.
    pub async fn fetch_products(&self, params: &FilterParams) -> Result<Vec<Product>, FetchError> {
        let mut attempt = 0;
        loop {
            match self.fetch_once(params).await {
                Ok(products) => return Ok(products),
                Err(error) if self.policy.retry.should_retry(&error, attempt) => {
                    let delay = self.policy.retry.backoff.delay(attempt);
                    tracing::warn!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        %error,
                        "product fetch failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(error) => return Err(error),
            }
        }
    }

    async fn fetch_once(&self, params: &FilterParams) -> Result<Vec<Product>, FetchError> {
        let query: Vec<(&str, &str)> = params.iter().map(|(f, v)| (f.as_str(), v)).collect();

        tracing::debug!(url = %self.products_url, fields = query.len(), "fetching products");

        let response = self
            .http
            .get(&self.products_url)
            .query(&query)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url: self.products_url.clone(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.request_error(e))?;
        let payload: ProductsPayload = serde_json::from_slice(&bytes)?;

        tracing::debug!(count = payload.products.len(), "products fetched");
        Ok(payload.products)
    }

    fn request_error(&self, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout(self.policy.timeout)
        } else if error.is_connect() {
            FetchError::Connection(error.to_string())
        } else {
            FetchError::Request(error.to_string())
        }
    }
}
