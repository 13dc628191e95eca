//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for Hubfolio.
#[derive(Debug, Clone, Parser)]
#[command(name = "hubfolio", version, about, long_about = None)]
pub struct Config {
    /// GitHub username to generate a portfolio for
    pub username: String,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Maximum number of repositories to include
    #[arg(long, default_value_t = 30)]
    pub limit: usize,

    /// GitHub API token (raises rate limits, never required)
    #[arg(long, env = "GITHUB_TOKEN")]
    pub token: Option<String>,

    /// Open the generated site in a browser when done
    #[arg(long)]
    pub open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the username is empty or the limit is zero.
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            bail!("Username must not be empty");
        }

        if self.limit == 0 {
            bail!("Repository limit must be at least 1");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(username: &str, limit: usize) -> Config {
        Config {
            username: username.to_string(),
            output: PathBuf::from("dist"),
            limit,
            token: None,
            open: false,
        }
    }

    #[test]
    fn test_validate_accepts_normal_config() {
        // Arrange
        let config = config("alice", 30);

        // Act & Assert
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_username() {
        // Arrange
        let config = config("   ", 30);

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_zero_limit() {
        // Arrange
        let config = config("alice", 0);

        // Act & Assert
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_clone() {
        // Arrange
        let original = config("alice", 5);

        // Act
        let cloned = original.clone();

        // Assert
        assert_eq!(cloned.username, original.username);
        assert_eq!(cloned.limit, original.limit);
    }
}
