use anyhow::{Context, Result};
use hubfolio::pages::file::FileRenderers;
use hubfolio::pages::repo::ListedEntry;
use hubfolio::{Config, ContentEntry, GithubClient, Repo, pages, write_assets};
use std::fs;
use std::path::Path;

/// Maximum file size fetched for file page generation.
///
/// Larger files are listed but not expanded into pages; the contents
/// API caps raw blobs at 1 MB anyway and a generated page beyond that
/// stops being readable.
const MAX_FILE_PAGE_BYTES: u64 = 1024 * 1024;

/// Extensions of files worth expanding into generated pages.
///
/// Everything else (binaries, archives, images) is listed without a
/// page. Markdown and notebooks are handled by their extension being
/// here as well, the page module picks the renderer.
const PAGE_EXTENSIONS: &[&str] = &[
    "md", "markdown", "ipynb", "rs", "py", "js", "ts", "go", "c", "h", "cpp", "hpp", "java", "rb",
    "sh", "toml", "yaml", "yml", "json", "txt", "css", "html", "sql", "lua", "zig",
];

/// Extensionless file names worth expanding into generated pages.
const PAGE_BARE_NAMES: &[&str] = &["makefile", "dockerfile", "license", "justfile"];

/// Returns true when a root file should get a generated page.
fn is_page_candidate(name: &str, size: u64) -> bool {
    if size > MAX_FILE_PAGE_BYTES {
        return false;
    }

    let lower = name.to_lowercase();
    match Path::new(&lower).extension().and_then(|e| e.to_str()) {
        Some(ext) => PAGE_EXTENSIONS.contains(&ext),
        None => PAGE_BARE_NAMES.contains(&lower.as_str()),
    }
}

/// Returns true for the repository README file.
fn is_readme(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.starts_with("readme") && (lower.ends_with(".md") || lower.ends_with(".markdown"))
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let client = GithubClient::new(config.token.clone());

    let user = client
        .fetch_user(&config.username)
        .context("Failed to fetch user profile")?;

    let mut repos = client
        .fetch_repos(&config.username)
        .context("Failed to fetch repositories")?;
    repos.truncate(config.limit);

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;
    let assets_dir = config.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    write_assets(&assets_dir)?;

    let avatar = user.avatar_url.as_deref().and_then(|url| {
        client
            .fetch_avatar(url)
            .map_err(|e| eprintln!("Warning: Failed to fetch avatar: {:#}", e))
            .ok()
    });

    let index_path = config.output.join("index.html");
    fs::write(
        &index_path,
        pages::index::generate(&user, avatar.as_deref(), &repos)
            .into_string(),
    )
    .context("Failed to write index page")?;
    println!("Generated: {}", index_path.display());

    let renderers = FileRenderers::new();
    let mut page_count = 1;

    for repo in &repos {
        match generate_repo(&client, &renderers, config.output.as_path(), repo) {
            Ok(count) => {
                page_count += count;
                println!("Generated: {} ({} pages)", repo.name, count);
            }
            Err(e) => eprintln!("Warning: Skipping repository {}: {:#}", repo.name, e),
        }
    }

    println!(
        "Generated {} pages in {}",
        page_count,
        config.output.display()
    );

    if config.open {
        open::that(&index_path)
            .with_context(|| format!("Failed to open {}", index_path.display()))?;
    }

    Ok(())
}

/// Generates the repository page and its root file pages.
///
/// A failed file page is a warning, not an error; only a failed root
/// listing aborts the repository (and even that is downgraded to a
/// warning by the caller).
fn generate_repo(
    client: &GithubClient,
    renderers: &FileRenderers<'_>,
    output: &Path,
    repo: &Repo,
) -> Result<usize> {
    let entries = client
        .fetch_contents(&repo.full_name, "")
        .context("Failed to fetch root contents")?;

    let repo_dir = output.join(&repo.name);
    let files_dir = repo_dir.join("files");
    fs::create_dir_all(&files_dir).context("Failed to create repository directory")?;

    let listed: Vec<ListedEntry> = entries
        .into_iter()
        .map(|entry| {
            let href = page_href(&entry);
            (entry, href)
        })
        .collect();

    let readme_html = find_and_render_readme(client, renderers, &listed);

    let repo_page = pages::repo::generate(repo, &listed, readme_html.as_deref());
    fs::write(repo_dir.join("index.html"), repo_page.into_string())
        .context("Failed to write repository page")?;

    let mut count = 1;
    for (entry, href) in &listed {
        let (Some(_), Some(download_url)) = (href, &entry.download_url) else {
            continue;
        };

        match generate_file_page(client, renderers, &files_dir, repo, entry, download_url) {
            Ok(()) => count += 1,
            Err(e) => eprintln!("Warning: Skipping file {}: {:#}", entry.path, e),
        }
    }

    Ok(count)
}

/// Relative link for an entry's generated page, if it gets one.
fn page_href(entry: &ContentEntry) -> Option<String> {
    if entry.is_file() && is_page_candidate(&entry.name, entry.size) {
        Some(format!("files/{}.html", entry.name))
    } else {
        None
    }
}

fn generate_file_page(
    client: &GithubClient,
    renderers: &FileRenderers<'_>,
    files_dir: &Path,
    repo: &Repo,
    entry: &ContentEntry,
    download_url: &str,
) -> Result<()> {
    let content = client
        .fetch_raw(download_url)
        .context("Failed to download file")?;

    let page = pages::file::generate(renderers, &repo.name, &entry.name, &content)
        .context("Failed to render file page")?;

    fs::write(
        files_dir.join(format!("{}.html", entry.name)),
        page.into_string(),
    )
    .context("Failed to write file page")?;

    Ok(())
}

/// Finds the README among the listed entries and renders it.
///
/// Render or download failures degrade to no README section, matching
/// the warning policy for every other per-item failure.
fn find_and_render_readme(
    client: &GithubClient,
    renderers: &FileRenderers<'_>,
    listed: &[ListedEntry],
) -> Option<String> {
    let (entry, _) = listed
        .iter()
        .find(|(entry, _)| entry.is_file() && is_readme(&entry.name))?;

    let download_url = entry.download_url.as_deref()?;

    let content = match client.fetch_raw(download_url) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Warning: Failed to download README: {:#}", e);
            return None;
        }
    };

    match renderers.markdown.render(&content) {
        Ok(html) => Some(html),
        Err(e) => {
            eprintln!("Warning: Failed to render README: {:#}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_page_candidate_known_extensions() {
        // Arrange & Act & Assert
        assert!(is_page_candidate("main.rs", 100));
        assert!(is_page_candidate("analysis.ipynb", 100));
        assert!(is_page_candidate("README.md", 100));
        assert!(is_page_candidate("config.YAML", 100));
    }

    #[test]
    fn test_is_page_candidate_rejects_binaries() {
        assert!(!is_page_candidate("logo.png", 100));
        assert!(!is_page_candidate("release.tar.gz", 100));
    }

    #[test]
    fn test_is_page_candidate_bare_names() {
        assert!(is_page_candidate("Makefile", 100));
        assert!(is_page_candidate("LICENSE", 100));
        assert!(!is_page_candidate("a.out", 100));
    }

    #[test]
    fn test_is_page_candidate_size_cap() {
        // Arrange & Act & Assert: oversized files are listed, not paged
        assert!(!is_page_candidate("big.json", MAX_FILE_PAGE_BYTES + 1));
        assert!(is_page_candidate("small.json", MAX_FILE_PAGE_BYTES));
    }

    #[test]
    fn test_is_readme_variants() {
        assert!(is_readme("README.md"));
        assert!(is_readme("readme.markdown"));
        assert!(is_readme("Readme.md"));
        assert!(!is_readme("CONTRIBUTING.md"));
        assert!(!is_readme("README.rst"));
    }

    #[test]
    fn test_page_href_for_files_only() {
        // Arrange
        let file = ContentEntry {
            name: "main.rs".to_string(),
            path: "main.rs".to_string(),
            size: 10,
            download_url: None,
            kind: hubfolio::EntryKind::File,
        };
        let dir = ContentEntry {
            name: "src".to_string(),
            path: "src".to_string(),
            size: 0,
            download_url: None,
            kind: hubfolio::EntryKind::Dir,
        };

        // Act & Assert
        assert_eq!(page_href(&file), Some("files/main.rs.html".to_string()));
        assert_eq!(page_href(&dir), None);
    }
}
