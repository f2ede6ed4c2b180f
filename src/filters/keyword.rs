//! Keyword-based name filtering.

use super::Filter;
use crate::listing::ProductRecord;

/// Filters records by keywords in the product name, case-insensitively.
pub struct KeywordFilter {
    /// Keywords that must all appear in the name.
    required: Vec<String>,
    /// Keywords none of which may appear in the name.
    excluded: Vec<String>,
}

impl KeywordFilter {
    pub fn new(required: Vec<String>, excluded: Vec<String>) -> Self {
        let lower = |words: Vec<String>| -> Vec<String> {
            words
                .into_iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect()
        };

        Self { required: lower(required), excluded: lower(excluded) }
    }

    pub fn required(keywords: Vec<String>) -> Self {
        Self::new(keywords, Vec::new())
    }

    pub fn excluded(keywords: Vec<String>) -> Self {
        Self::new(Vec::new(), keywords)
    }
}

impl Filter for KeywordFilter {
    fn matches(&self, record: &ProductRecord) -> bool {
        let name = record.name().to_lowercase();

        self.required.iter().all(|k| name.contains(k.as_str()))
            && !self.excluded.iter().any(|k| name.contains(k.as_str()))
    }

    fn description(&self) -> String {
        let mut parts = Vec::new();

        if !self.required.is_empty() {
            parts.push(format!("Must contain: {}", self.required.join(", ")));
        }

        if !self.excluded.is_empty() {
            parts.push(format!("Must not contain: {}", self.excluded.join(", ")));
        }

        if parts.is_empty() {
            "Keywords: any".to_string()
        } else {
            parts.join("; ")
        }
    }
}
