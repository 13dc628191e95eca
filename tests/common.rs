//! Shared test utilities for integration tests.
//!
//! Provides builders for notebook JSON fixtures used across multiple
//! test files.

use serde_json::{Value, json};

/// Builds a notebook document from a cell list.
pub fn notebook(cells: Vec<Value>) -> Value {
    json!({
        "cells": cells,
        "metadata": { "language_info": { "name": "python" } },
        "nbformat": 4,
        "nbformat_minor": 5
    })
}

/// Builds a markdown cell with fragment-array source.
pub fn markdown_cell(fragments: &[&str]) -> Value {
    json!({
        "cell_type": "markdown",
        "metadata": {},
        "source": fragments
    })
}

/// Builds a code cell with the given outputs.
pub fn code_cell(source: &str, execution_count: Option<i64>, outputs: Vec<Value>) -> Value {
    json!({
        "cell_type": "code",
        "execution_count": execution_count,
        "metadata": {},
        "source": source,
        "outputs": outputs
    })
}

/// Builds a stream output record.
pub fn stream_output(fragments: &[&str]) -> Value {
    json!({
        "output_type": "stream",
        "name": "stdout",
        "text": fragments
    })
}

/// Builds a display-data output with the given mime bundle.
pub fn data_output(data: Value) -> Value {
    json!({
        "output_type": "display_data",
        "data": data,
        "metadata": {}
    })
}
