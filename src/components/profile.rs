//! Profile header component

use maud::{Markup, html};

use crate::github::User;

/// Renders the profile header for the index page
///
/// Shows the avatar (a pre-fetched data URI when available), display
/// name with login fallback, bio, and follower/repository counters.
/// The outbound profile link opens in a detached context.
///
/// # Arguments
///
/// * `user`: User profile to display
/// * `avatar`: Optional data URI for the embedded avatar image
///
/// # Returns
///
/// Profile header markup
pub fn profile_header(user: &User, avatar: Option<&str>) -> Markup {
    let display_name = user.name.as_deref().unwrap_or(&user.login);

    html! {
        header class="profile-header" {
            @if let Some(src) = avatar {
                img class="profile-avatar" src=(src) alt=(display_name);
            }
            div class="profile-identity" {
                h1 class="profile-name" { (display_name) }
                a class="profile-login" href=(user.html_url)
                    target="_blank" rel="noopener noreferrer" {
                    "@" (user.login)
                }
                @if let Some(bio) = &user.bio {
                    p class="profile-bio" { (bio) }
                }
                div class="profile-meta" {
                    @if let Some(location) = &user.location {
                        span { (location) }
                    }
                    @if let Some(company) = &user.company {
                        span { (company) }
                    }
                }
                div class="profile-counters" {
                    span { (user.public_repos) " repositories" }
                    span { (user.followers) " followers" }
                    span { (user.following) " following" }
                }
            }
        }
    }
}
