//! Composable filters applied to aggregated listings.

pub mod keyword;
pub mod price;

use crate::listing::ProductRecord;

pub use keyword::KeywordFilter;
pub use price::PriceFilter;

/// Trait for filtering listings.
pub trait Filter: Send + Sync {
    /// Returns true if the record passes the filter.
    fn matches(&self, record: &ProductRecord) -> bool;

    /// Returns a description of this filter.
    fn description(&self) -> String;
}

/// A chain of filters that must all pass.
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterChain {
    /// Creates an empty filter chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter to the chain.
    pub fn add(&mut self, filter: impl Filter + 'static) -> &mut Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Checks if a record passes all filters.
    pub fn matches(&self, record: &ProductRecord) -> bool {
        self.filters.iter().all(|f| f.matches(record))
    }

    /// Keeps the records that pass, in their original order.
    pub fn apply(&self, records: Vec<ProductRecord>) -> Vec<ProductRecord> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns descriptions of all filters.
    pub fn descriptions(&self) -> Vec<String> {
        self.filters.iter().map(|f| f.description()).collect()
    }
}

/// Builder for constructing a FilterChain from configuration.
#[derive(Default)]
pub struct FilterChainBuilder {
    chain: FilterChain,
}

impl FilterChainBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a normalized price range filter.
    pub fn price_range(mut self, min: Option<u64>, max: Option<u64>) -> Self {
        if min.is_some() || max.is_some() {
            self.chain.add(PriceFilter::new(min, max));
        }
        self
    }

    /// Adds required keywords filter.
    pub fn keywords(mut self, keywords: Vec<String>) -> Self {
        if !keywords.is_empty() {
            self.chain.add(KeywordFilter::required(keywords));
        }
        self
    }

    /// Adds excluded keywords filter.
    pub fn exclude_keywords(mut self, keywords: Vec<String>) -> Self {
        if !keywords.is_empty() {
            self.chain.add(KeywordFilter::excluded(keywords));
        }
        self
    }

    pub fn build(self) -> FilterChain {
        self.chain
    }
}
