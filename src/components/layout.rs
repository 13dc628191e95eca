//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

/// Wraps page content with standard HTML structure
///
/// Provides consistent DOCTYPE, html, head, and container structure
/// across all page types. The wrapper handles viewport configuration,
/// charset, and asset loading while the caller provides page-specific
/// body content. Asset paths are passed pre-resolved because pages live
/// at different directory depths.
///
/// # Arguments
///
/// * `title`: Page title text (without suffix)
/// * `stylesheets`: CSS file paths to include
/// * `scripts`: Deferred script paths to include
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(title: &str, stylesheets: &[&str], scripts: &[&str], body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Hubfolio" }
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
                @for script in scripts {
                    script src=(script) defer {}
                }
            }
            body {
                div class="container" {
                    (body)
                }
                (footer())
            }
        }
    }
}

/// Site footer with generator attribution
fn footer() -> Markup {
    html! {
        footer class="site-footer" {
            span { "Generated with hubfolio" }
        }
    }
}
