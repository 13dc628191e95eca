//! File page generation for blob content viewing
//!
//! Dispatches on file extension: markdown renders as rich text,
//! notebooks go through the notebook pipeline, and everything else is
//! shown as syntax highlighted source with line number anchors.

use anyhow::{Context, Result};
use maud::{Markup, PreEscaped, html};
use std::path::Path;

use crate::components::layout::page_wrapper;
use crate::highlight::Highlighter;
use crate::markdown::MarkdownRenderer;
use crate::notebook::NotebookRenderer;

/// How a file is rendered, decided by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Markdown,
    Notebook,
    Source,
}

impl FileKind {
    /// Detects the rendering kind from a file name.
    pub fn from_name(name: &str) -> Self {
        match Path::new(name).extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("md") => FileKind::Markdown,
            Some(ext) if ext.eq_ignore_ascii_case("markdown") => FileKind::Markdown,
            Some(ext) if ext.eq_ignore_ascii_case("ipynb") => FileKind::Notebook,
            _ => FileKind::Source,
        }
    }
}

/// Shared renderers for file page generation.
///
/// Constructed once per run; syntax definitions are expensive to load.
pub struct FileRenderers<'a> {
    pub markdown: MarkdownRenderer<'a>,
    pub notebook: NotebookRenderer<'a>,
    pub highlighter: Highlighter,
}

impl<'a> FileRenderers<'a> {
    /// Creates the full renderer set.
    pub fn new() -> Self {
        Self {
            markdown: MarkdownRenderer::new(),
            notebook: NotebookRenderer::new(),
            highlighter: Highlighter::new(),
        }
    }
}

impl<'a> Default for FileRenderers<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates a file page from fetched content
///
/// # Arguments
///
/// * `renderers`: Shared renderer set
/// * `repo_name`: Repository name for the breadcrumb
/// * `file_name`: File name within the repository root
/// * `content`: Raw file content
///
/// # Returns
///
/// Complete HTML markup for the file page
///
/// # Errors
///
/// Returns error if markdown rendering or highlighting fails; notebook
/// rendering never fails (invalid documents become an inline indicator)
pub fn generate(
    renderers: &FileRenderers<'_>,
    repo_name: &str,
    file_name: &str,
    content: &str,
) -> Result<Markup> {
    let body = match FileKind::from_name(file_name) {
        FileKind::Markdown => {
            let rendered = renderers
                .markdown
                .render(content)
                .with_context(|| format!("Failed to render markdown: {}", file_name))?;
            html! {
                main class="markdown-content" { (PreEscaped(rendered)) }
            }
        }
        FileKind::Notebook => html! {
            main class="notebook-content" {
                (renderers.notebook.render_source(content))
            }
        },
        FileKind::Source => {
            let highlighted = renderers
                .highlighter
                .highlight_file(content, Path::new(file_name))
                .with_context(|| format!("Failed to highlight file: {}", file_name))?;
            source_markup(content, &highlighted)
        }
    };

    Ok(page_wrapper(
        file_name,
        &[
            "../../assets/file.css",
            "../../assets/markdown.css",
            "../../assets/notebook.css",
        ],
        &["../../assets/copy.js"],
        html! {
            header class="file-header" {
                div class="breadcrumb" {
                    a href="../index.html" class="breadcrumb-link" { (repo_name) }
                    span class="breadcrumb-separator" { "/" }
                    span class="breadcrumb-current" { (file_name) }
                }
            }
            (body)
        },
    ))
}

/// Renders highlighted source with a line number gutter
fn source_markup(content: &str, highlighted: &str) -> Markup {
    let line_count = content.lines().count().max(1);

    html! {
        main class="blob-container" {
            div class="line-numbers" {
                @for line_num in 1..=line_count {
                    a href=(format!("#L{}", line_num)) id=(format!("L{}", line_num)) class="line-number" {
                        (line_num)
                    }
                }
            }
            pre class="code-content" {
                code { (PreEscaped(highlighted)) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_detection() {
        // Arrange & Act & Assert
        assert_eq!(FileKind::from_name("README.md"), FileKind::Markdown);
        assert_eq!(FileKind::from_name("notes.markdown"), FileKind::Markdown);
        assert_eq!(FileKind::from_name("analysis.ipynb"), FileKind::Notebook);
        assert_eq!(FileKind::from_name("main.rs"), FileKind::Source);
        assert_eq!(FileKind::from_name("Makefile"), FileKind::Source);
        assert_eq!(FileKind::from_name("Demo.IPYNB"), FileKind::Notebook);
    }

    #[test]
    fn test_generate_markdown_page() {
        // Arrange
        let renderers = FileRenderers::new();

        // Act
        let html = generate(&renderers, "demo", "README.md", "# Title\n\nBody.")
            .expect("Should generate")
            .into_string();

        // Assert
        assert!(html.contains("markdown-content"));
        assert!(html.contains("<h1>"));
        assert!(html.contains("demo"), "Breadcrumb shows repo");
    }

    #[test]
    fn test_generate_notebook_page() {
        // Arrange
        let renderers = FileRenderers::new();
        let notebook = r#"{"cells":[{"cell_type":"code","execution_count":1,"source":"x = 1","outputs":[]}]}"#;

        // Act
        let html = generate(&renderers, "demo", "analysis.ipynb", notebook)
            .expect("Should generate")
            .into_string();

        // Assert
        assert!(html.contains("notebook-content"));
        assert!(html.contains("In [1]:"));
        assert!(html.contains("copy.js"), "Notebook pages load copy script");
    }

    #[test]
    fn test_generate_invalid_notebook_page() {
        // Arrange
        let renderers = FileRenderers::new();

        // Act
        let html = generate(&renderers, "demo", "broken.ipynb", "{\"nbformat\":4}")
            .expect("Page generation itself should not fail")
            .into_string();

        // Assert
        assert!(html.contains("Invalid notebook format"));
    }

    #[test]
    fn test_generate_source_page() {
        // Arrange
        let renderers = FileRenderers::new();

        // Act
        let html = generate(&renderers, "demo", "main.rs", "fn main() {}\nfn aux() {}\n")
            .expect("Should generate")
            .into_string();

        // Assert
        assert!(html.contains("blob-container"));
        assert!(html.contains("hljs-"), "Should highlight rust source");
        assert!(html.contains(r#"id="L2""#), "Should emit line anchors");
    }
}
