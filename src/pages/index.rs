//! Profile index page generation

use maud::{Markup, html};

use crate::components::layout::page_wrapper;
use crate::components::profile::profile_header;
use crate::components::repo_card::repo_card;
use crate::github::{Repo, User};

/// Generates the profile index page
///
/// Shows the user header followed by one card per repository, in the
/// order given (the client already sorts by update time with forks
/// removed). Each card links to the repository's generated page.
///
/// # Arguments
///
/// * `user`: Profile owner
/// * `avatar`: Optional pre-fetched avatar data URI
/// * `repos`: Repositories to list
///
/// # Returns
///
/// Complete HTML markup for the index page
pub fn generate(user: &User, avatar: Option<&str>, repos: &[Repo]) -> Markup {
    let display_name = user.name.as_deref().unwrap_or(&user.login);

    page_wrapper(
        display_name,
        &["assets/index.css"],
        &[],
        html! {
            (profile_header(user, avatar))
            main class="repo-list" {
                @if repos.is_empty() {
                    p class="repo-list-empty" { "No repositories to show." }
                }
                @for repo in repos {
                    (repo_card(repo, &format!("{}/index.html", repo.name)))
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            login: "alice".to_string(),
            name: None,
            avatar_url: None,
            html_url: "https://github.com/alice".to_string(),
            bio: None,
            company: None,
            location: None,
            blog: None,
            public_repos: 1,
            followers: 0,
            following: 0,
        }
    }

    fn sample_repo(name: &str) -> Repo {
        Repo {
            name: name.to_string(),
            full_name: format!("alice/{}", name),
            description: None,
            html_url: format!("https://github.com/alice/{}", name),
            stargazers_count: 0,
            forks_count: 0,
            language: None,
            updated_at: None,
            default_branch: "main".to_string(),
            fork: false,
        }
    }

    #[test]
    fn test_generate_with_repos() {
        // Arrange
        let user = sample_user();
        let repos = vec![sample_repo("one"), sample_repo("two")];

        // Act
        let html = generate(&user, None, &repos).into_string();

        // Assert
        assert!(html.contains("@alice"));
        assert!(html.contains(r#"href="one/index.html""#));
        assert!(html.contains(r#"href="two/index.html""#));
        assert!(!html.contains("No repositories to show."));
    }

    #[test]
    fn test_generate_empty() {
        // Arrange
        let user = sample_user();

        // Act
        let html = generate(&user, None, &[]).into_string();

        // Assert
        assert!(html.contains("No repositories to show."));
    }

    #[test]
    fn test_generate_preserves_repo_order() {
        // Arrange
        let user = sample_user();
        let repos = vec![sample_repo("zeta"), sample_repo("alpha")];

        // Act
        let html = generate(&user, None, &repos).into_string();

        // Assert: given order kept, no re-sorting
        let zeta = html.find("zeta").expect("zeta present");
        let alpha = html.find("alpha").expect("alpha present");
        assert!(zeta < alpha);
    }
}
