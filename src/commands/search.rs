//! Search command implementation.

use crate::config::Config;
use crate::fetch::{Fetcher, HttpFetcher};
use crate::filters::FilterChainBuilder;
use crate::format::Formatter;
use crate::listing::{aggregate, extract, ProductRecord};
use crate::sources::Source;
use anyhow::{Context, Result};
use tracing::{debug, info, warn};

/// Searches every configured source and prints the merged listings.
pub struct SearchCommand {
    config: Config,
}

impl SearchCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the search and returns formatted output.
    pub async fn execute(&self, query: &str) -> Result<String> {
        let fetcher = HttpFetcher::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_with_fetcher(&fetcher, query).await
    }

    /// Executes the search with a provided fetcher (for testing).
    pub async fn execute_with_fetcher(&self, fetcher: &impl Fetcher, query: &str) -> Result<String> {
        let records = self.collect(fetcher, query).await?;

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_records(&records))
    }

    /// Fetches, extracts, merges and filters listings for `query`.
    pub async fn collect(&self, fetcher: &impl Fetcher, query: &str) -> Result<Vec<ProductRecord>> {
        let query = query.trim();
        if query.is_empty() {
            anyhow::bail!("Search query must not be empty");
        }

        info!("Searching for: {}", query);

        let mut record_sets = Vec::with_capacity(self.config.sources.len());
        for source in &self.config.sources {
            record_sets.push(self.search_source(fetcher, *source, query).await);
        }

        let filters = FilterChainBuilder::new()
            .price_range(self.config.min_price, self.config.max_price)
            .keywords(self.config.keywords.clone())
            .exclude_keywords(self.config.exclude_keywords.clone())
            .build();

        if !filters.is_empty() {
            debug!("Active filters: {}", filters.descriptions().join(", "));
        }

        let mut records = filters.apply(aggregate(record_sets));

        if let Some(max) = self.config.max_results {
            records.truncate(max);
        }

        info!("Found {} products matching criteria", records.len());
        Ok(records)
    }

    /// Listings from one source; a failed fetch contributes nothing.
    async fn search_source(
        &self,
        fetcher: &impl Fetcher,
        source: Source,
        query: &str,
    ) -> Vec<ProductRecord> {
        let url = source.search_url(query);
        info!("Searching {}: {}", source.label(), url);

        match fetcher.fetch(&url).await {
            Ok(markup) => extract(&markup, source.descriptor()),
            Err(e) => {
                warn!("Skipping {}: {}", source.label(), e);
                Vec::new()
            }
        }
    }
}
