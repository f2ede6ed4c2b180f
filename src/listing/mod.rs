//! Listing extraction, price normalization and aggregation.

pub mod aggregate;
pub mod models;
pub mod parser;
pub mod price;
pub mod selectors;

pub use aggregate::aggregate;
pub use models::ProductRecord;
pub use parser::extract;
pub use price::normalize_price;
pub use selectors::{AttrMatcher, ElementMatcher, SelectorDescriptor};
