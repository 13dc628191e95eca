//! Repository card component

use maud::{Markup, html};

use crate::github::Repo;
use crate::util::format_month_year;

/// Renders one repository card for the profile page
///
/// Shows language and star badges, the repository name linking to its
/// generated page, the description, and an "Updated Month Year" line.
/// Repositories without a description get a placeholder so cards keep
/// a uniform shape.
///
/// # Arguments
///
/// * `repo`: Repository to display
/// * `href`: Link target for the generated repository page
///
/// # Returns
///
/// Card markup for inclusion in the repository list
pub fn repo_card(repo: &Repo, href: &str) -> Markup {
    let updated = repo
        .updated_at
        .as_deref()
        .map(format_month_year)
        .unwrap_or_default();

    html! {
        div class="repo-card" {
            div class="repo-badges" {
                @if let Some(language) = &repo.language {
                    span class="badge badge-language" { (language) }
                }
                @if repo.stargazers_count > 0 {
                    span class="badge badge-stars" { "★ " (repo.stargazers_count) }
                }
            }
            div class="repo-body" {
                h3 class="repo-name" {
                    a href=(href) { (repo.name) }
                }
                p class="repo-description" {
                    @if let Some(description) = &repo.description {
                        (description)
                    } @else {
                        "No description provided."
                    }
                }
                @if !updated.is_empty() {
                    p class="repo-updated" { "Updated " (updated) "." }
                }
                div class="repo-links" {
                    a href=(href) { "View details" }
                    a href=(repo.html_url) target="_blank" rel="noopener noreferrer" {
                        "GitHub source"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_repo() -> Repo {
        Repo {
            name: "demo".to_string(),
            full_name: "alice/demo".to_string(),
            description: Some("A demo project".to_string()),
            html_url: "https://github.com/alice/demo".to_string(),
            stargazers_count: 5,
            forks_count: 1,
            language: Some("Rust".to_string()),
            updated_at: Some("2024-03-01T12:00:00Z".to_string()),
            default_branch: "main".to_string(),
            fork: false,
        }
    }

    #[test]
    fn test_repo_card_full() {
        // Arrange
        let repo = sample_repo();

        // Act
        let html = repo_card(&repo, "demo/index.html").into_string();

        // Assert
        assert!(html.contains("demo"), "Should show name");
        assert!(html.contains("Rust"), "Should show language badge");
        assert!(html.contains("★ 5"), "Should show star badge");
        assert!(html.contains("A demo project"), "Should show description");
        assert!(html.contains("Updated March 2024."), "Should show updated line");
        assert!(
            html.contains(r#"rel="noopener noreferrer""#),
            "External link should be hardened"
        );
    }

    #[test]
    fn test_repo_card_minimal() {
        // Arrange
        let mut repo = sample_repo();
        repo.description = None;
        repo.language = None;
        repo.stargazers_count = 0;
        repo.updated_at = None;

        // Act
        let html = repo_card(&repo, "demo/index.html").into_string();

        // Assert
        assert!(html.contains("No description provided."));
        assert!(!html.contains("badge-language"), "No language badge");
        assert!(!html.contains("badge-stars"), "No star badge for zero");
        assert!(!html.contains("Updated "), "No updated line");
    }
}
