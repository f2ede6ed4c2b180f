//! Listing selectors for each supported site.
//!
//! Update this file when a site changes its search page structure.
//!
//! **Update process**: when extraction comes back empty, capture an HTML
//! sample, update the matchers here, and add a test fixture.

use crate::listing::{ElementMatcher, SelectorDescriptor};

/// amazon.in search results.
pub const AMAZON: SelectorDescriptor = SelectorDescriptor {
    product: ElementMatcher::class("div", "s-result-item"),
    name: ElementMatcher::class("span", "a-text-normal"),
    price: ElementMatcher::class("span", "a-offscreen"),
    source: "Amazon",
};

/// snapdeal.com search results.
pub const SNAPDEAL: SelectorDescriptor = SelectorDescriptor {
    product: ElementMatcher::class("div", "product-tuple-listing"),
    name: ElementMatcher::class("p", "product-title"),
    price: ElementMatcher::class("span", "product-price"),
    source: "Snapdeal",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::extract;

    #[test]
    fn test_selectors_compile() {
        for descriptor in [AMAZON, SNAPDEAL] {
            assert!(descriptor.product.compile().is_some());
            assert!(descriptor.name.compile().is_some());
            assert!(descriptor.price.compile().is_some());
        }
    }

    #[test]
    fn test_amazon_card() {
        let html = r#"<div class="sg-col-inner"><div data-asin="B0C" class="s-result-item s-asin">
            <h2><a class="a-link-normal" href="/dp/B0C">
                <span class="a-size-medium a-color-base a-text-normal">Redmi 13C</span>
            </a></h2>
            <span class="a-price"><span class="a-offscreen">₹7,999</span>
            <span aria-hidden="true">₹7,999</span></span>
        </div></div>"#;

        let records = extract(html, &AMAZON);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name().trim(), "Redmi 13C");
        assert_eq!(records[0].price_text(), "₹7,999");
        assert_eq!(records[0].link(), "/dp/B0C");
        assert_eq!(records[0].source(), "Amazon");
    }

    #[test]
    fn test_snapdeal_card() {
        let html = r#"<div class="col-xs-6 favDp product-tuple-listing js-tuple">
            <a class="dp-widget-link" href="https://www.snapdeal.com/product/shoe/123"></a>
            <p class="product-title" title="Running Shoe">Running Shoe</p>
            <span class="lfloat product-price">Rs. 499</span>
        </div>"#;

        let records = extract(html, &SNAPDEAL);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name(), "Running Shoe");
        assert_eq!(records[0].price(), 499);
        assert_eq!(records[0].link(), "https://www.snapdeal.com/product/shoe/123");
        assert_eq!(records[0].source(), "Snapdeal");
    }
}
