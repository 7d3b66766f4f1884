//! Product service seam.

use async_trait::async_trait;
use storefront_commerce::{FilterParams, Product};

use crate::client::{FetchError, ProductClient};

/// The storefront's one outbound dependency.
///
/// Accepts a possibly-empty parameter set and returns the full ordered
/// result set in one call. Failures are the implementation's to classify;
/// callers surface them, they never synthesize results.
#[async_trait]
pub trait ProductService: Send + Sync {
    async fn fetch(&self, params: &FilterParams) -> Result<Vec<Product>, FetchError>;
}

#[async_trait]
impl ProductService for ProductClient {
    async fn fetch(&self, params: &FilterParams) -> Result<Vec<Product>, FetchError> {
        self.fetch_products(params).await
    }
}
