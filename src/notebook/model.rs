//! Notebook document model and shape classification.
//!
//! Notebook JSON is untrusted remote data, so all duck-typed field
//! inspection happens here, once, behind `Notebook::from_value`. The
//! rest of the crate only ever sees the tagged `Cell` and `Output`
//! variants produced by this module.

use serde_json::Value;

use super::source::{join_base64, join_text};

/// One rendered result attached to a code cell.
///
/// Classification follows a fixed priority order over field presence:
/// `text` beats the mime bundle; within the bundle, `image/*` beats
/// `text/html` beats `text/plain`. Anything else is `Unknown` and
/// renders nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Streamed stdout/stderr text.
    Stream(String),
    /// Base64 encoded image with its mime subtype key (e.g. `image/png`).
    Image { mime: String, data: String },
    /// Raw HTML, still unsanitized at this point.
    Html(String),
    /// Plain text representation of a value.
    Plain(String),
    /// Unrecognized shape; renders as nothing, not an error.
    Unknown,
}

impl Output {
    /// Classifies one raw output record.
    ///
    /// Never fails: records with unexpected shapes classify as
    /// `Unknown` so a single odd output cannot abort its siblings.
    ///
    /// # Arguments
    ///
    /// * `value`: Raw JSON output record
    pub fn from_value(value: &Value) -> Self {
        if let Some(text) = value.get("text") {
            if !text.is_null() {
                return Output::Stream(join_text(Some(text)));
            }
        }

        let Some(data) = value.get("data").and_then(|d| d.as_object()) else {
            return Output::Unknown;
        };

        if let Some((mime, payload)) = data.iter().find(|(key, _)| key.starts_with("image/")) {
            return Output::Image {
                mime: mime.clone(),
                data: join_base64(Some(payload)),
            };
        }

        if let Some(html) = data.get("text/html") {
            return Output::Html(join_text(Some(html)));
        }

        if let Some(plain) = data.get("text/plain") {
            return Output::Plain(join_text(Some(plain)));
        }

        Output::Unknown
    }

    /// Returns true when this output produces no visual content.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Output::Unknown)
    }
}

/// One unit of a notebook, tagged by `cell_type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Prose cell rendered as formatted rich text.
    Markdown { source: String },
    /// Code cell with an optional execution counter and captured outputs.
    Code {
        source: String,
        execution_count: Option<i64>,
        outputs: Vec<Output>,
    },
    /// Forward-compatible no-op for unrecognized cell types.
    Other,
}

impl Cell {
    /// Classifies one raw cell record.
    ///
    /// Unknown `cell_type` values map to `Other` rather than erroring,
    /// so future notebook revisions degrade to skipped cells.
    pub fn from_value(value: &Value) -> Self {
        let source = join_text(value.get("source"));

        match value.get("cell_type").and_then(|t| t.as_str()) {
            Some("markdown") => Cell::Markdown { source },
            Some("code") => Cell::Code {
                source,
                execution_count: value.get("execution_count").and_then(|c| c.as_i64()),
                outputs: value
                    .get("outputs")
                    .and_then(|o| o.as_array())
                    .map(|outputs| outputs.iter().map(Output::from_value).collect())
                    .unwrap_or_default(),
            },
            _ => Cell::Other,
        }
    }
}

/// A parsed notebook document.
///
/// Cell order is semantically significant and preserved exactly.
/// Format version fields and document metadata are opaque; only the
/// source language hint is extracted for syntax highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notebook {
    pub cells: Vec<Cell>,
    pub language: String,
}

/// Default highlighting language when the notebook metadata names none.
const DEFAULT_LANGUAGE: &str = "python";

impl Notebook {
    /// Validates and classifies a decoded notebook document.
    ///
    /// The only structural requirement is an iterable `cells` array; a
    /// document missing it is invalid and must short-circuit to an
    /// error indicator rather than partially render. Individual cells
    /// and outputs never fail classification.
    ///
    /// # Arguments
    ///
    /// * `value`: Decoded JSON of unknown trustworthiness
    ///
    /// # Returns
    ///
    /// Parsed notebook, or `None` when the cell sequence is missing or
    /// not an array
    pub fn from_value(value: &Value) -> Option<Self> {
        let cells = value.get("cells")?.as_array()?;

        let language = value
            .get("metadata")
            .and_then(|m| m.get("language_info"))
            .and_then(|l| l.get("name"))
            .and_then(|n| n.as_str())
            .unwrap_or(DEFAULT_LANGUAGE)
            .to_string();

        Some(Notebook {
            cells: cells.iter().map(Cell::from_value).collect(),
            language,
        })
    }
}
