//! Product listing records extracted from search result pages.

use super::price::normalize_price;
use serde::{Deserialize, Serialize};

/// A single product listing as found on a source's search page.
///
/// Fields hold the markup text verbatim; `price_text` is normalized on demand
/// through [`ProductRecord::price`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductRecord {
    name: String,
    price_text: String,
    link: String,
    source: String,
}

impl ProductRecord {
    /// Creates a record from its four parts.
    pub fn new(
        name: impl Into<String>,
        price_text: impl Into<String>,
        link: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price_text: price_text.into(),
            link: link.into(),
            source: source.into(),
        }
    }

    /// Product name as it appeared in the markup.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw price text, e.g. `"₹1,299"`.
    pub fn price_text(&self) -> &str {
        &self.price_text
    }

    /// The listing's `href`, possibly relative to the source site.
    pub fn link(&self) -> &str {
        &self.link
    }

    /// Label of the source the record was extracted from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Normalized integer price.
    pub fn price(&self) -> u64 {
        normalize_price(&self.price_text)
    }
}
