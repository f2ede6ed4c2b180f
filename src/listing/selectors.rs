//! Selector descriptors telling the parser where listings live in a page.
//!
//! Each source defines one [`SelectorDescriptor`] as a `const`. Matchers are
//! kept as named tag + attribute pairs and only turned into CSS when a page is
//! parsed.

use scraper::Selector;
use std::fmt;

/// Attribute condition an element must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrMatcher {
    /// The element's class list contains this class.
    Class(&'static str),
    /// The attribute exists, whatever its value.
    Present(&'static str),
}

/// An element tag plus an attribute condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementMatcher {
    pub tag: &'static str,
    pub attr: AttrMatcher,
}

impl ElementMatcher {
    /// Matches `tag` elements carrying `class`.
    pub const fn class(tag: &'static str, class: &'static str) -> Self {
        Self { tag, attr: AttrMatcher::Class(class) }
    }

    /// Matches `tag` elements that have a `name` attribute.
    pub const fn has_attr(tag: &'static str, name: &'static str) -> Self {
        Self { tag, attr: AttrMatcher::Present(name) }
    }

    /// CSS form of this matcher, e.g. `div.s-result-item`.
    pub fn css(&self) -> String {
        match self.attr {
            AttrMatcher::Class(class) => format!("{}.{}", self.tag, class),
            AttrMatcher::Present(name) => format!("{}[{}]", self.tag, name),
        }
    }

    /// Compiles the matcher, returning `None` if it is not a valid selector.
    pub fn compile(&self) -> Option<Selector> {
        Selector::parse(&self.css()).ok()
    }
}

impl fmt::Display for ElementMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

/// How to find product listings on one source's search page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorDescriptor {
    /// Repeating container holding one listing.
    pub product: ElementMatcher,
    /// Product name, searched inside the container.
    pub name: ElementMatcher,
    /// Price text, searched inside the container.
    pub price: ElementMatcher,
    /// Literal label stored in every extracted record.
    pub source: &'static str,
}

/// Anchor carrying the listing link; the same for every source.
pub const LINK: ElementMatcher = ElementMatcher::has_attr("a", "href");
