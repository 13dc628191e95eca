//! HTML sanitization for untrusted remote content.
//!
//! Every byte of notebook and README content originates from a remote
//! repository, so there is no trusted/untrusted distinction by source:
//! all raw HTML passes through this allow-list sanitizer before it
//! reaches a live-rendering sink.

use ammonia::Builder as HtmlSanitizer;

/// Sanitizes untrusted HTML for safe embedding.
///
/// Strips executable content (script elements, inline event handlers,
/// `javascript:` URIs) while preserving structural and formatting
/// markup. Anchors are rewritten to open in a detached context:
/// `target="_blank"` with `rel="noopener noreferrer"`, so a linked page
/// never gains a window handle back to the viewer.
///
/// The allow-list additionally admits `class` attributes (syntax
/// highlighting spans) and disabled checkbox inputs (GFM task lists).
///
/// # Arguments
///
/// * `html`: Raw untrusted HTML
///
/// # Returns
///
/// Sanitized HTML string; worst case an empty string, never an error
pub fn sanitize_html(html: &str) -> String {
    HtmlSanitizer::default()
        .add_generic_attributes(&["class"])
        .add_tags(&["input"])
        .add_tag_attributes("input", &["type", "checked", "disabled"])
        .set_tag_attribute_value("a", "target", "_blank")
        .link_rel(Some("noopener noreferrer"))
        .clean(html)
        .to_string()
}
