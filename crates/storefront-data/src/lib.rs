//! Product service client for the storefront.
//!
//! This crate owns the single outbound dependency of the client: fetching
//! products for a set of filter parameters. It provides:
//!
//! - `ProductService` - the seam the dispatcher talks to
//! - `ProductClient` - the HTTP implementation with timeout and retry
//! - `FetchError` - typed failures surfaced to the caller

mod client;
mod retry;
mod service;

pub use client::{FetchError, FetchPolicy, ProductClient};
pub use retry::{Backoff, RetryPolicy};
pub use service::ProductService;
