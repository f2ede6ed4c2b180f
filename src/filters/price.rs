//! Normalized price range filter.

use super::Filter;
use crate::listing::ProductRecord;

/// Filters records by normalized price, bounds inclusive.
pub struct PriceFilter {
    min: Option<u64>,
    max: Option<u64>,
}

impl PriceFilter {
    pub fn new(min: Option<u64>, max: Option<u64>) -> Self {
        Self { min, max }
    }
}

impl Filter for PriceFilter {
    fn matches(&self, record: &ProductRecord) -> bool {
        let price = record.price();

        // Price text without digits normalizes to 0; treat it as unknown and keep it
        if price == 0 {
            return true;
        }

        self.min.is_none_or(|min| price >= min) && self.max.is_none_or(|max| price <= max)
    }

    fn description(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("Price: Rs. {} - Rs. {}", min, max),
            (Some(min), None) => format!("Price: >= Rs. {}", min),
            (None, Some(max)) => format!("Price: <= Rs. {}", max),
            (None, None) => "Price: any".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(price: &str) -> ProductRecord {
        ProductRecord::new("Phone", price, "/p", "Snapdeal")
    }

    #[test]
    fn test_price_range_inclusive() {
        let filter = PriceFilter::new(Some(500), Some(1000));
        assert!(filter.matches(&record("Rs. 500")));
        assert!(filter.matches(&record("Rs. 750")));
        assert!(filter.matches(&record("Rs. 1,000")));
        assert!(!filter.matches(&record("Rs. 499")));
        assert!(!filter.matches(&record("Rs. 1,001")));
    }

    #[test]
    fn test_fraction_is_truncated_before_comparing() {
        let filter = PriceFilter::new(None, Some(1000));
        assert!(filter.matches(&record("Rs. 1,000.99")));
    }

    #[test]
    fn test_one_sided_bounds() {
        assert!(PriceFilter::new(Some(100), None).matches(&record("99999")));
        assert!(!PriceFilter::new(Some(100), None).matches(&record("99")));
        assert!(PriceFilter::new(None, Some(100)).matches(&record("1")));
        assert!(!PriceFilter::new(None, Some(100)).matches(&record("101")));
    }

    #[test]
    fn test_unknown_price_passes() {
        let filter = PriceFilter::new(Some(500), Some(1000));
        assert!(filter.matches(&record("See price in cart")));
    }

    #[test]
    fn test_description() {
        assert_eq!(PriceFilter::new(Some(1), Some(2)).description(), "Price: Rs. 1 - Rs. 2");
        assert_eq!(PriceFilter::new(Some(1), None).description(), "Price: >= Rs. 1");
        assert_eq!(PriceFilter::new(None, Some(2)).description(), "Price: <= Rs. 2");
        assert_eq!(PriceFilter::new(None, None).description(), "Price: any");
    }
}
