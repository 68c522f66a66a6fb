//! HTML Allow-List Sanitizer
//!
//! Renders author-supplied HTML with only a fixed set of tags. The input is
//! parsed as a full document by html5ever, the same algorithm the browser
//! runs, and the body is written back out. Any element outside the
//! allow-list is pruned together with everything inside it; its children are
//! not hoisted into the parent.
//!
//! Attributes on kept elements are passed through untouched. Comments are
//! dropped.

mod serialize;

use scraper::{ElementRef, Html};

/// Tags that survive sanitization
pub const ALLOWED_TAGS: &[&str] = &["p", "strong", "em", "ul", "ol", "li", "a", "span", "br"];

/// Sanitize with the default allow-list
pub fn sanitize_html(html: &str) -> String {
    sanitize_with(html, ALLOWED_TAGS)
}

/// Sanitize with a caller-provided allow-list (lowercase tag names)
pub fn sanitize_with(html: &str, allowed: &[&str]) -> String {
    let document = Html::parse_document(html);
    let mut out = String::with_capacity(html.len());
    if let Some(body) = body_element(&document) {
        serialize::write_children(body, &|name: &str| allowed.contains(&name), &mut out);
    }
    out
}

fn body_element(document: &Html) -> Option<ElementRef<'_>> {
    document
        .root_element()
        .children()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "body")
}
