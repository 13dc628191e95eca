//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared across multiple
//! page types (index, repo, file). Components handle specific UI
//! elements with consistent styling and behavior, eliminating
//! duplication across generator functions.

pub mod file_list;
pub mod layout;
pub mod profile;
pub mod repo_card;
