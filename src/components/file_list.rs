//! File listing table components

use maud::{Markup, html};

use crate::github::ContentEntry;
use crate::util::format_file_size;

/// Wraps file rows in table container
///
/// Provides semantic file table structure with consistent styling.
/// The container handles card styling while individual rows are
/// rendered by `file_row`.
pub fn file_table(rows: Markup) -> Markup {
    html! {
        div class="file-table" {
            (rows)
        }
    }
}

/// Renders single file row in table
///
/// Displays the entry with a directory or file marker, its name, and
/// its size. Rows link either to a generated page (`Some(href)`) or to
/// nothing for entries the generator does not expand (the name is then
/// shown inert).
///
/// # Arguments
///
/// * `entry`: Content entry to display
/// * `href`: Optional link target for the row
///
/// # Returns
///
/// File row markup
pub fn file_row(entry: &ContentEntry, href: Option<&str>) -> Markup {
    let marker = if entry.is_dir() { "▸" } else { "·" };
    let size = if entry.is_dir() {
        String::new()
    } else {
        format_file_size(entry.size)
    };

    html! {
        div class="file-row" {
            div class="file-name-cell" {
                span class="file-marker" { (marker) }
                @if let Some(link) = href {
                    a href=(link) class="file-link" { (entry.name) }
                } @else {
                    span { (entry.name) }
                }
            }
            div class="file-size" { (size) }
        }
    }
}
