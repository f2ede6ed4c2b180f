//! Supported shopping sites, their search URLs and listing selectors.

pub mod selectors;

use crate::listing::SelectorDescriptor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A site searched for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Amazon,
    Snapdeal,
}

impl Source {
    /// Search URL prefix; the encoded query is appended as-is.
    pub fn url_prefix(&self) -> &'static str {
        match self {
            Source::Amazon => "https://www.amazon.in/s?k=",
            Source::Snapdeal => "https://www.snapdeal.com/search?keyword=",
        }
    }

    /// Builds the search URL for a free-text query.
    pub fn search_url(&self, query: &str) -> String {
        format!("{}{}", self.url_prefix(), urlencoding::encode(query))
    }

    /// Selectors for this site's search result page.
    pub fn descriptor(&self) -> &'static SelectorDescriptor {
        match self {
            Source::Amazon => &selectors::AMAZON,
            Source::Snapdeal => &selectors::SNAPDEAL,
        }
    }

    /// Label attached to records from this site.
    pub fn label(&self) -> &'static str {
        self.descriptor().source
    }

    /// Returns all supported sources, in the order they are searched by default.
    pub fn all() -> &'static [Source] {
        &[Source::Amazon, Source::Snapdeal]
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Source::Amazon => "amazon",
            Source::Snapdeal => "snapdeal",
        };
        write!(f, "{}", code)
    }
}

impl FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "amazon" | "amz" => Ok(Source::Amazon),
            "snapdeal" | "sd" => Ok(Source::Snapdeal),
            _ => Err(format!("Unknown source: {}. Use: amazon, snapdeal", s)),
        }
    }
}
