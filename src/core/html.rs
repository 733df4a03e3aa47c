// src/core/html.rs
//! Small helpers over `scraper` shared by the page specs.

use scraper::{ElementRef, Selector};

/// Parse a selector known at compile time. Only used for static selectors.
pub fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid CSS selector {css:?}: {e}"))
}

/// All descendant text of an element, concatenated, untrimmed.
pub fn elem_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// First descendant of `scope` matching `sel`.
pub fn first<'a>(scope: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    scope.select(sel).next()
}
