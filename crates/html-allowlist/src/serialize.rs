//! Fragment Serializer
//!
//! Writes a parsed tree back out the way `innerHTML` does, skipping every
//! element the caller rejects together with its subtree.

use scraper::{ElementRef, Node};

/// Elements serialized without a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track", "wbr",
];

pub fn write_children<F>(parent: ElementRef<'_>, keep: &F, out: &mut String)
where
    F: Fn(&str) -> bool,
{
    for child in parent.children() {
        match child.value() {
            Node::Text(text) => escape_text(&text.text, out),
            Node::Element(_) => {
                if let Some(element) = ElementRef::wrap(child) {
                    write_element(element, keep, out);
                }
            }
            // comments, doctypes and processing instructions render nothing
            _ => {}
        }
    }
}

fn write_element<F>(element: ElementRef<'_>, keep: &F, out: &mut String)
where
    F: Fn(&str) -> bool,
{
    let name = element.value().name();
    if !keep(name) {
        return;
    }
    out.push('<');
    out.push_str(name);
    for (attr, value) in element.value().attrs() {
        out.push(' ');
        out.push_str(attr);
        out.push_str("=\"");
        escape_attr(value, out);
        out.push('"');
    }
    out.push('>');
    if VOID_ELEMENTS.contains(&name) {
        return;
    }
    write_children(element, keep, out);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}
