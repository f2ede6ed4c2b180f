//! Integration tests for listing extraction using captured search pages.

use price_scout::{aggregate, extract, ProductRecord, Source};

const AMAZON_FIXTURE: &str = include_str!("fixtures/amazon_search.html");
const SNAPDEAL_FIXTURE: &str = include_str!("fixtures/snapdeal_search.html");

fn amazon_records() -> Vec<ProductRecord> {
    extract(AMAZON_FIXTURE, Source::Amazon.descriptor())
}

fn snapdeal_records() -> Vec<ProductRecord> {
    extract(SNAPDEAL_FIXTURE, Source::Snapdeal.descriptor())
}

#[test]
fn test_extract_amazon_page() {
    let records = amazon_records();

    // Banner and the unavailable card have no price
    assert_eq!(records.len(), 3);

    let first = &records[0];
    assert_eq!(first.name(), "ASIAN Men's Wonder-13 Sports Running Shoes");
    assert_eq!(first.price_text(), "₹649");
    assert_eq!(first.price(), 649);
    assert_eq!(first.link(), "/ASIAN-Wonder-13-Running-Shoes/dp/B0BXK7M1QZ");
    assert_eq!(first.source(), "Amazon");

    // Sponsored links are kept as-is, entities decoded
    assert_eq!(
        records[1].link(),
        "/sspa/click?ie=UTF8&url=%2FPuma-Softride-Running%2Fdp%2FB0C1H2JK9X"
    );
    assert_eq!(records[1].price(), 3839);

    // Fractional part is dropped
    assert_eq!(records[2].price_text(), "₹999.00");
    assert_eq!(records[2].price(), 999);
}

#[test]
fn test_extract_snapdeal_page() {
    let records = snapdeal_records();

    // The card without a link is skipped
    let names: Vec<&str> = records.iter().map(|r| r.name()).collect();
    assert_eq!(
        names,
        vec!["Aadi Running Shoes Black", "Columbus Running Shoes Grey", "Action Sports Shoes White"]
    );

    // The struck-through list price is not the listing price
    assert_eq!(records[0].price_text(), "Rs.  399");
    assert_eq!(records[0].price(), 399);
    assert_eq!(
        records[0].link(),
        "https://www.snapdeal.com/product/aadi-running-shoes/638616928867"
    );
    assert!(records.iter().all(|r| r.source() == "Snapdeal"));
}

#[test]
fn test_extract_with_wrong_descriptor() {
    assert!(extract(AMAZON_FIXTURE, Source::Snapdeal.descriptor()).is_empty());
    assert!(extract(SNAPDEAL_FIXTURE, Source::Amazon.descriptor()).is_empty());
}

#[test]
fn test_aggregate_both_pages() {
    let merged = aggregate([amazon_records(), snapdeal_records()]);

    let summary: Vec<(&str, u64)> = merged.iter().map(|r| (r.source(), r.price())).collect();
    assert_eq!(
        summary,
        vec![
            ("Snapdeal", 399),
            ("Amazon", 649),
            ("Snapdeal", 649),
            ("Amazon", 999),
            ("Snapdeal", 2299),
            ("Amazon", 3839),
        ]
    );

    // Equal prices keep source order
    assert_eq!(merged[1].name(), "ASIAN Men's Wonder-13 Sports Running Shoes");
    assert_eq!(merged[2].name(), "Columbus Running Shoes Grey");
}

#[test]
fn test_filter_integration() {
    use price_scout::filters::FilterChainBuilder;

    let merged = aggregate([amazon_records(), snapdeal_records()]);

    let filters = FilterChainBuilder::new()
        .price_range(Some(500), Some(2500))
        .keywords(vec!["running".to_string()])
        .build();

    let filtered = filters.apply(merged);
    let names: Vec<&str> = filtered.iter().map(|r| r.name()).collect();

    // Action is not a running shoe; Puma is over budget
    assert_eq!(
        names,
        vec![
            "ASIAN Men's Wonder-13 Sports Running Shoes",
            "Columbus Running Shoes Grey",
            "Bacca Bucci Men's Running Shoes",
        ]
    );
}
