//! Rich Text Section Component
//!
//! Renders server-provided HTML through the allow-list sanitizer.

use leptos::prelude::*;

use html_allowlist::sanitize_html;

/// Section body filled with sanitized markup
#[component]
pub fn RichTextSection(
    /// Outer CSS class, e.g. "place" or "dress"
    #[prop(into)] class: String,
    #[prop(into)] html: Signal<String>,
) -> impl IntoView {
    let content_class = format!("{}-content", class);
    let rendered_html = move || html.with(|raw| sanitize_html(raw));

    view! {
        <div class=class>
            <div class=content_class inner_html=rendered_html></div>
        </div>
    }
}
