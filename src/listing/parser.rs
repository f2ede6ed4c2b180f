//! Extraction of product records from search result markup.

use super::models::ProductRecord;
use super::selectors::{ElementMatcher, SelectorDescriptor, LINK};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace, warn};

/// Compiled selectors for one descriptor.
struct Compiled {
    product: Selector,
    name: Selector,
    price: Selector,
    link: Selector,
}

impl Compiled {
    fn new(descriptor: &SelectorDescriptor) -> Option<Self> {
        let compile = |matcher: &ElementMatcher| {
            let selector = matcher.compile();
            if selector.is_none() {
                warn!("Invalid selector for {}: {}", descriptor.source, matcher);
            }
            selector
        };

        Some(Self {
            product: compile(&descriptor.product)?,
            name: compile(&descriptor.name)?,
            price: compile(&descriptor.price)?,
            link: compile(&LINK)?,
        })
    }
}

/// Extracts every complete product listing from `markup`.
///
/// Containers are visited in document order. A container yields a record only
/// when a name element, a price element and an `a[href]` are all found inside
/// it; anything less is skipped without complaint. Any input, including empty
/// or non-HTML text, is accepted and may simply produce no records.
pub fn extract(markup: &str, descriptor: &SelectorDescriptor) -> Vec<ProductRecord> {
    let Some(selectors) = Compiled::new(descriptor) else {
        return Vec::new();
    };

    let document = Html::parse_document(markup);
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for container in document.select(&selectors.product) {
        match parse_container(container, &selectors, descriptor.source) {
            Some(record) => {
                trace!("Parsed listing: {} ({})", record.name().trim(), record.price_text());
                records.push(record);
            }
            None => skipped += 1,
        }
    }

    debug!(
        "Extracted {} {} listings ({} incomplete containers skipped)",
        records.len(),
        descriptor.source,
        skipped
    );

    records
}

fn parse_container(
    container: ElementRef,
    selectors: &Compiled,
    source: &str,
) -> Option<ProductRecord> {
    let name = container.select(&selectors.name).next()?;
    let price = container.select(&selectors.price).next()?;
    let link = container.select(&selectors.link).next()?.value().attr("href")?;

    Some(ProductRecord::new(
        name.text().collect::<String>(),
        price.text().collect::<String>(),
        link,
        source,
    ))
}
