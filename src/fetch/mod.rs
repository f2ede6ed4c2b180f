//! Page fetching with bounded retries.

pub mod client;
pub mod error;
pub mod retry;

pub use client::{Fetcher, HttpFetcher, RequestProfile};
pub use error::FetchError;
pub use retry::RetryPolicy;
