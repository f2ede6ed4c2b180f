//! Merging of per-source listings into one price-ordered list.

use super::models::ProductRecord;

/// Concatenates the record sets in order and sorts them by normalized price.
///
/// The sort is stable: records with the same price keep their relative
/// order, both within a set and across sets. Nothing is deduplicated.
pub fn aggregate<I>(record_sets: I) -> Vec<ProductRecord>
where
    I: IntoIterator<Item = Vec<ProductRecord>>,
{
    let mut merged: Vec<ProductRecord> = record_sets.into_iter().flatten().collect();
    merged.sort_by_key(ProductRecord::price);
    merged
}
