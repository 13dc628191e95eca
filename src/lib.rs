//! Static portfolio site generator for GitHub profiles.

mod assets;
pub mod components;
mod config;
mod github;
mod highlight;
mod markdown;
pub mod notebook;
pub mod pages;
mod sanitize;
mod util;

pub use assets::write_assets;
pub use config::Config;
pub use github::{ContentEntry, EntryKind, GithubClient, Repo, User, keep_original, sort_entries};
pub use highlight::Highlighter;
pub use markdown::MarkdownRenderer;
pub use notebook::NotebookRenderer;
pub use sanitize::sanitize_html;
pub use util::{format_file_size, format_month_year, format_relative_time};
