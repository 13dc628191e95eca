//! CSS and script asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");
const FILE_LIST: &str = include_str!("../assets/components/file-list.css");

const INDEX_PAGE: &str = include_str!("../assets/page-index.css");
const REPO_PAGE: &str = include_str!("../assets/page-repo.css");
const FILE_PAGE: &str = include_str!("../assets/page-file.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");
const NOTEBOOK: &str = include_str!("../assets/notebook.css");

const COPY_SCRIPT: &str = include_str!("../assets/copy.js");

/// Writes all bundled assets to output directory
pub fn write_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(assets_dir, "index.css", &[BASE, LAYOUT, INDEX_PAGE])?;
    write_bundled(
        assets_dir,
        "repo.css",
        &[BASE, LAYOUT, FILE_LIST, REPO_PAGE],
    )?;
    write_bundled(assets_dir, "file.css", &[BASE, LAYOUT, FILE_PAGE])?;
    write_bundled(assets_dir, "markdown.css", &[MARKDOWN])?;
    write_bundled(assets_dir, "notebook.css", &[NOTEBOOK])?;

    fs::write(assets_dir.join("copy.js"), COPY_SCRIPT)
        .context("Failed to write copy.js asset")?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
