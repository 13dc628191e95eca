//! Notebook to HTML rendering.
//!
//! Walks a classified notebook top-down: document, then cells in order,
//! then outputs in order. Failures isolate at the smallest unit — a bad
//! output is skipped, a bad cell degrades to escaped text, and only a
//! missing cell sequence short-circuits the whole document into a
//! single error indicator.

use maud::{Markup, PreEscaped, html};
use serde_json::Value;

use super::model::{Cell, Notebook, Output};
use crate::highlight::{Highlighter, escape_html};
use crate::markdown::MarkdownRenderer;
use crate::sanitize::sanitize_html;

/// Renders notebook documents to maud markup.
///
/// Holds the markdown renderer and syntax highlighter so syntax
/// definitions load once per generation run rather than once per cell.
pub struct NotebookRenderer<'a> {
    markdown: MarkdownRenderer<'a>,
    highlighter: Highlighter,
}

impl<'a> NotebookRenderer<'a> {
    /// Creates a renderer with default markdown and highlighting setup.
    pub fn new() -> Self {
        Self {
            markdown: MarkdownRenderer::new(),
            highlighter: Highlighter::new(),
        }
    }

    /// Renders raw notebook JSON text.
    ///
    /// Undecodable JSON is treated the same as a structurally invalid
    /// document: one inline error indicator, nothing else.
    ///
    /// # Arguments
    ///
    /// * `json`: Raw notebook file content
    pub fn render_source(&self, json: &str) -> Markup {
        match serde_json::from_str::<Value>(json) {
            Ok(value) => self.render(&value),
            Err(_) => error_indicator(),
        }
    }

    /// Renders a decoded notebook document.
    ///
    /// A document without an iterable `cells` sequence renders exactly
    /// one error indicator and no cell blocks. A zero-cell notebook
    /// renders an empty, non-error container. Otherwise cells render in
    /// document order, each anchored by its ordinal position.
    ///
    /// # Arguments
    ///
    /// * `value`: Decoded JSON of unknown trustworthiness
    pub fn render(&self, value: &Value) -> Markup {
        let Some(notebook) = Notebook::from_value(value) else {
            return error_indicator();
        };

        html! {
            div class="notebook" {
                @for (index, cell) in notebook.cells.iter().enumerate() {
                    (self.render_cell(cell, index, &notebook.language))
                }
            }
        }
    }

    /// Renders one cell at its ordinal position.
    ///
    /// The position is only a display anchor; it carries no other
    /// semantics. Unrecognized cell kinds render nothing.
    fn render_cell(&self, cell: &Cell, index: usize, language: &str) -> Markup {
        match cell {
            Cell::Markdown { source } => html! {
                div class="cell cell-markdown" id=(format!("cell-{}", index)) {
                    (PreEscaped(self.render_markdown(source)))
                }
            },
            Cell::Code {
                source,
                execution_count,
                outputs,
            } => self.render_code_cell(source, *execution_count, outputs, index, language),
            Cell::Other => html! {},
        }
    }

    /// Renders prose with a degraded fallback.
    ///
    /// A markdown pass only fails inside syntax highlighting; in that
    /// case the cell falls back to escaped preformatted text so its
    /// siblings still render.
    fn render_markdown(&self, source: &str) -> String {
        self.markdown
            .render(source)
            .unwrap_or_else(|_| format!("<pre>{}</pre>", escape_html(source)))
    }

    fn render_code_cell(
        &self,
        source: &str,
        execution_count: Option<i64>,
        outputs: &[Output],
        index: usize,
        language: &str,
    ) -> Markup {
        let label = match execution_count {
            Some(count) => format!("In [{}]:", count),
            None => "In [ ]:".to_string(),
        };

        let highlighted = self
            .highlighter
            .highlight(source, language)
            .unwrap_or_else(|_| escape_html(source));

        html! {
            div class="cell cell-code" id=(format!("cell-{}", index)) {
                span class="execution-count" { (label) }
                div class="code-block" {
                    button type="button" class="copy-button" data-copy-source=(source) title="Copy code" {
                        "Copy"
                    }
                    pre class="cell-source" {
                        code { (PreEscaped(highlighted)) }
                    }
                }
                @if outputs.iter().any(|o| !o.is_unknown()) {
                    div class="cell-outputs" {
                        @for output in outputs {
                            (render_output(output))
                        }
                    }
                }
            }
        }
    }
}

impl<'a> Default for NotebookRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders one classified output record.
///
/// Stream and plain text keep whitespace in a wrapping preformatted
/// block. Images become self-contained data URIs; a malformed payload
/// surfaces as a broken image, never a failure. Raw HTML passes through
/// the sanitizer unconditionally. Unknown outputs render nothing.
fn render_output(output: &Output) -> Markup {
    match output {
        Output::Stream(text) => html! {
            pre class="output-text" { (text) }
        },
        Output::Image { mime, data } => html! {
            div class="output-image" {
                img src=(format!("data:{};base64,{}", mime, data)) alt="Output";
            }
        },
        Output::Html(raw) => html! {
            div class="output-html" { (PreEscaped(sanitize_html(raw))) }
        },
        Output::Plain(text) => html! {
            pre class="output-text output-plain" { (text) }
        },
        Output::Unknown => html! {},
    }
}

/// Single user-visible indicator for structurally invalid documents.
fn error_indicator() -> Markup {
    html! {
        div class="notebook-error" { "Invalid notebook format" }
    }
}
