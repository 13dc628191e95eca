//! Repository page generation

use maud::{Markup, PreEscaped, html};

use crate::components::file_list::{file_row, file_table};
use crate::components::layout::page_wrapper;
use crate::github::{ContentEntry, Repo};
use crate::util::format_relative_time;

/// One listing row: the entry plus an optional generated-page link.
///
/// The driver decides which entries get file pages; entries without one
/// (directories, binaries, oversized files) render as inert rows.
pub type ListedEntry = (ContentEntry, Option<String>);

/// Generates a repository page
///
/// Shows a header linking back to the profile index and out to GitHub,
/// the root directory listing, and the rendered README below the
/// listing when one exists.
///
/// # Arguments
///
/// * `repo`: Repository being rendered
/// * `entries`: Root listing rows, already sorted directories-first
/// * `readme_html`: Pre-rendered, sanitized README content
///
/// # Returns
///
/// Complete HTML markup for the repository page
pub fn generate(repo: &Repo, entries: &[ListedEntry], readme_html: Option<&str>) -> Markup {
    page_wrapper(
        &repo.name,
        &["../assets/repo.css", "../assets/markdown.css"],
        &[],
        html! {
            header class="repo-header" {
                div class="breadcrumb" {
                    a href="../index.html" class="breadcrumb-link" { "~" }
                    span class="breadcrumb-separator" { "/" }
                    span class="breadcrumb-current" { (repo.name) }
                }
                div class="repo-header-meta" {
                    span class="branch-badge" { (repo.default_branch) }
                    @if let Some(updated) = &repo.updated_at {
                        span class="updated-ago" { "updated " (format_relative_time(updated)) }
                    }
                    a href=(repo.html_url) target="_blank" rel="noopener noreferrer" {
                        "View on GitHub"
                    }
                }
            }
            main {
                (file_table(html! {
                    @for (entry, href) in entries {
                        (file_row(entry, href.as_deref()))
                    }
                }))
                @if let Some(readme) = readme_html {
                    section class="readme-section" {
                        div class="readme-card markdown-content" {
                            (PreEscaped(readme))
                        }
                    }
                }
            }
        },
    )
}
