//! Jupyter notebook rendering pipeline.
//!
//! This module turns untrusted notebook JSON into safe HTML. Raw shape
//! inspection is confined to `model`, text normalization to `source`,
//! and markup generation to `render`. Adversarial documents degrade to
//! skipped outputs, skipped cells, or a single error indicator.

mod model;
mod render;
mod source;

pub use model::{Cell, Notebook, Output};
pub use render::NotebookRenderer;
pub use source::{join_base64, join_text};
