//! Syntax highlighting with syntect.

use anyhow::{Context, Result};
use std::path::Path;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Highlights source code to HTML with CSS classes.
///
/// Resolves languages by token ("python", "rust") or file extension and
/// emits `<span class="hljs-*">` markup for styling by the bundled
/// stylesheet. Unknown languages degrade to escaped monospace text
/// rather than failing.
pub struct Highlighter {
    syntax_set: SyntaxSet,
}

impl Highlighter {
    /// Creates a highlighter with the default syntax definitions.
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Highlights code identified by a language token.
    ///
    /// # Arguments
    ///
    /// * `code`: Source code to highlight
    /// * `token`: Language identifier (name or extension)
    ///
    /// # Returns
    ///
    /// HTML with highlighting spans, or escaped plain text when the
    /// token matches no known syntax
    ///
    /// # Errors
    ///
    /// Returns error if syntect fails to parse a line
    pub fn highlight(&self, code: &str, token: &str) -> Result<String> {
        if code.is_empty() {
            return Ok(String::new());
        }

        let syntax = self
            .syntax_set
            .find_syntax_by_token(token)
            .or_else(|| self.syntax_set.find_syntax_by_extension(token));

        let syntax = match syntax {
            Some(s) => s,
            None => return Ok(escape_html(code)),
        };

        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::SpacedPrefixed { prefix: "hljs-" },
        );

        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .context("Failed to parse line for syntax highlighting")?;
        }

        Ok(generator.finalize())
    }

    /// Highlights a file's content using its extension as the token.
    ///
    /// Files without a recognizable extension render as escaped plain
    /// text.
    ///
    /// # Errors
    ///
    /// Returns error if highlighting fails
    pub fn highlight_file(&self, code: &str, path: &Path) -> Result<String> {
        let token = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        self.highlight(code, token)
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Escapes HTML special characters.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_python_token() {
        // Arrange
        let highlighter = Highlighter::new();
        let code = "def main():\n    pass\n";

        // Act
        let html = highlighter
            .highlight(code, "python")
            .expect("Highlighting should succeed");

        // Assert
        assert!(
            html.contains("<span class=\"hljs-"),
            "Should contain highlighting spans: {}",
            html
        );
        assert!(html.contains("def"), "Should contain keyword text");
    }

    #[test]
    fn test_highlight_unknown_token_falls_back() {
        // Arrange
        let highlighter = Highlighter::new();
        let code = "some <text> here";

        // Act
        let html = highlighter
            .highlight(code, "nosuchlanguage")
            .expect("Fallback should succeed");

        // Assert
        assert!(!html.contains("hljs-"), "Should not contain classes");
        assert!(html.contains("&lt;text&gt;"), "Should escape markup");
    }

    #[test]
    fn test_highlight_empty_code() {
        // Arrange
        let highlighter = Highlighter::new();

        // Act
        let html = highlighter.highlight("", "rust").expect("Should succeed");

        // Assert
        assert_eq!(html, "");
    }

    #[test]
    fn test_highlight_file_by_extension() {
        // Arrange
        let highlighter = Highlighter::new();
        let code = "fn main() {}";

        // Act
        let html = highlighter
            .highlight_file(code, Path::new("src/main.rs"))
            .expect("Should succeed");

        // Assert
        assert!(html.contains("hljs-"), "Should highlight by extension");
    }

    #[test]
    fn test_highlight_file_without_extension() {
        // Arrange
        let highlighter = Highlighter::new();

        // Act
        let html = highlighter
            .highlight_file("plain content", Path::new("LICENSE"))
            .expect("Should succeed");

        // Assert
        assert!(html.contains("plain content"));
    }

    #[test]
    fn test_escape_html_all_characters() {
        // Arrange
        let input = r#"<>&"'"#;

        // Act
        let output = escape_html(input);

        // Assert
        assert_eq!(output, "&lt;&gt;&amp;&quot;&#39;");
    }
}
