//! price-scout - Search Amazon India and Snapdeal and list the results by price
//!
//! Search result pages are fetched per source, product listings are extracted
//! with per-site selectors, and the merged results are ordered by their
//! normalized integer price.

pub mod commands;
pub mod config;
pub mod fetch;
pub mod filters;
pub mod format;
pub mod listing;
pub mod sources;

pub use config::Config;
pub use fetch::{FetchError, Fetcher, HttpFetcher, RetryPolicy};
pub use listing::{aggregate, extract, normalize_price, ProductRecord, SelectorDescriptor};
pub use sources::Source;
