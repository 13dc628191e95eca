//! GitHub REST API client.
//!
//! Thin blocking client over `api.github.com` covering exactly what the
//! generator needs: a user profile, the user's repositories, directory
//! listings, and raw file content. Responses are decoded with serde and
//! errors carry enough context to be printed as warnings.

use anyhow::{Context, Result, anyhow};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;
use std::io::Read;

const BASE_URL: &str = "https://api.github.com";

/// Fixed page size for repository listings. A single page is fetched;
/// there is deliberately no pagination.
const REPOS_PER_PAGE: usize = 100;

/// A GitHub user profile.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub html_url: String,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub blog: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
}

/// A repository as returned by the user repos listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Repo {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    pub language: Option<String>,
    pub updated_at: Option<String>,
    pub default_branch: String,
    #[serde(default)]
    pub fork: bool,
}

/// One entry of a repository contents listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub size: u64,
    pub download_url: Option<String>,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

/// Content entry kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    #[serde(other)]
    Other,
}

impl ContentEntry {
    /// Returns true for plain file entries.
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Returns true for directory entries.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// Blocking GitHub API client.
pub struct GithubClient {
    agent: ureq::Agent,
    token: Option<String>,
}

impl GithubClient {
    /// Creates a client, optionally authenticated.
    ///
    /// A token only raises rate limits; everything fetched is public.
    ///
    /// # Arguments
    ///
    /// * `token`: Optional GitHub API token sent as a bearer header
    pub fn new(token: Option<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(concat!("hubfolio/", env!("CARGO_PKG_VERSION")))
            .build();

        Self { agent, token }
    }

    /// Fetches a user profile.
    ///
    /// # Errors
    ///
    /// Returns "user not found" for 404, a contextual error otherwise.
    pub fn fetch_user(&self, login: &str) -> Result<User> {
        let response = self.get(&format!("{}/users/{}", BASE_URL, login), "user profile")?;
        response
            .into_json()
            .context("Failed to decode user profile")
    }

    /// Fetches the user's repositories, most recently updated first.
    ///
    /// Forked repositories are filtered out so the portfolio showcases
    /// original work only. At most one fixed page is requested.
    ///
    /// # Errors
    ///
    /// Returns error if the request or decode fails.
    pub fn fetch_repos(&self, login: &str) -> Result<Vec<Repo>> {
        let url = format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            BASE_URL, login, REPOS_PER_PAGE
        );
        let response = self.get(&url, "repository list")?;
        let repos: Vec<Repo> = response
            .into_json()
            .context("Failed to decode repository list")?;

        Ok(keep_original(repos))
    }

    /// Fetches a directory listing within a repository.
    ///
    /// Entries come back directories first, then files, each group
    /// sorted by name. A path that resolves to a single file yields a
    /// one-element list.
    ///
    /// # Arguments
    ///
    /// * `full_name`: "owner/repo" pair
    /// * `path`: Path within the tree; empty string for the root
    ///
    /// # Errors
    ///
    /// Returns error if the request or decode fails.
    pub fn fetch_contents(&self, full_name: &str, path: &str) -> Result<Vec<ContentEntry>> {
        let url = if path.is_empty() {
            format!("{}/repos/{}/contents", BASE_URL, full_name)
        } else {
            format!("{}/repos/{}/contents/{}", BASE_URL, full_name, path)
        };

        let response = self.get(&url, "repository contents")?;
        let value: serde_json::Value = response
            .into_json()
            .context("Failed to decode repository contents")?;

        let mut entries: Vec<ContentEntry> = if value.is_array() {
            serde_json::from_value(value).context("Failed to decode contents listing")?
        } else {
            vec![serde_json::from_value(value).context("Failed to decode single content entry")?]
        };

        sort_entries(&mut entries);
        Ok(entries)
    }

    /// Downloads raw file content as text.
    ///
    /// # Errors
    ///
    /// Returns error if the download fails or the body is not UTF8.
    pub fn fetch_raw(&self, download_url: &str) -> Result<String> {
        let response = self.get(download_url, "raw file")?;
        response.into_string().context("Failed to read file body")
    }

    /// Downloads an avatar image and embeds it as a data URI.
    ///
    /// Keeps generated sites self-contained instead of hotlinking the
    /// avatar host. The mime type comes from the response header with a
    /// PNG fallback.
    ///
    /// # Errors
    ///
    /// Returns error if the download fails.
    pub fn fetch_avatar(&self, avatar_url: &str) -> Result<String> {
        let response = self.get(avatar_url, "avatar image")?;
        let mime = match response.content_type() {
            "" => "image/png".to_string(),
            other => other.to_string(),
        };

        let mut bytes = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut bytes)
            .context("Failed to read avatar body")?;

        Ok(format!("data:{};base64,{}", mime, BASE64.encode(&bytes)))
    }

    fn get(&self, url: &str, what: &str) -> Result<ureq::Response> {
        let mut request = self
            .agent
            .get(url)
            .set("Accept", "application/vnd.github+json");

        if let Some(token) = &self.token {
            request = request.set("Authorization", &format!("Bearer {}", token));
        }

        match request.call() {
            Ok(response) => Ok(response),
            Err(ureq::Error::Status(code, _)) => Err(status_error(code, what, url)),
            Err(e) => Err(e).with_context(|| format!("Request failed for {} ({})", what, url)),
        }
    }
}

/// Drops forked repositories, keeping the listing order.
///
/// The portfolio showcases original work only; forks never get pages.
pub fn keep_original(repos: Vec<Repo>) -> Vec<Repo> {
    repos.into_iter().filter(|repo| !repo.fork).collect()
}

/// Maps a non-success API status to its error message.
///
/// 404 gets a distinct "Not found" message so a missing user or file
/// reads differently from rate limiting or server failures.
fn status_error(code: u16, what: &str, url: &str) -> anyhow::Error {
    if code == 404 {
        anyhow!("Not found: {} ({})", what, url)
    } else {
        anyhow!("GitHub API returned {} for {} ({})", code, what, url)
    }
}

/// Sorts content entries directories-first, then by name.
pub fn sort_entries(entries: &mut [ContentEntry]) {
    entries.sort_by(|a, b| {
        b.is_dir()
            .cmp(&a.is_dir())
            .then_with(|| a.name.cmp(&b.name))
    });
}
