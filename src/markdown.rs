//! Markdown rendering with GitHub Flavored Markdown support.
//!
//! Rendering happens in three passes: comrak converts markdown to HTML
//! with GFM extensions, fenced code blocks are re-highlighted with
//! syntect CSS classes, and the result is run through the allow-list
//! sanitizer. Markdown here always originates from remote repositories
//! (READMEs, notebook prose cells), so sanitization is unconditional.

use anyhow::{Context, Result};
use comrak::Options;

use crate::highlight::Highlighter;
use crate::sanitize::sanitize_html;

/// Renders markdown to sanitized HTML with GFM extensions.
///
/// Provides tables, strikethrough, autolinks, task lists, footnotes,
/// and description lists. Fenced code blocks are syntax highlighted
/// with syntect when the language is recognized. All output passes
/// through the sanitizer, which also rewrites links to open in a
/// detached browsing context.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    highlighter: Highlighter,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with GitHub Flavored Markdown options.
    pub fn new() -> Self {
        let mut options = Options::default();

        // Extension options (GFM features)
        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;
        options.extension.description_lists = true;

        // Parse options (smart punctuation)
        options.parse.smart = true;

        // Raw HTML passes through comrak untouched; the sanitizer pass
        // at the end of render() is the trust boundary.
        options.render.unsafe_ = true;

        Self {
            options,
            highlighter: Highlighter::new(),
        }
    }

    /// Renders markdown content to sanitized HTML.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content to render
    ///
    /// # Returns
    ///
    /// Sanitized HTML with syntax highlighted code blocks
    ///
    /// # Errors
    ///
    /// Returns error if syntax highlighting fails
    pub fn render(&self, content: &str) -> Result<String> {
        let html = comrak::markdown_to_html(content, &self.options);
        let html = self.highlight_code_blocks(&html)?;
        Ok(sanitize_html(&html))
    }

    /// Post-processes HTML to apply syntax highlighting with CSS classes.
    ///
    /// Finds code blocks with language-* classes from comrak's output
    /// and replaces the escaped text content with syntect highlighted
    /// HTML.
    ///
    /// # Errors
    ///
    /// Returns error if highlighting fails
    fn highlight_code_blocks(&self, html: &str) -> Result<String> {
        let mut result = String::with_capacity(html.len());
        let mut last_end = 0;
        let mut search_pos = 0;

        // Pattern: <code class="language-LANG">CODE</code>
        while let Some(code_start) = html[search_pos..].find("<code class=\"language-") {
            let code_start = search_pos + code_start;

            let lang_start = code_start + "<code class=\"language-".len();
            let lang_end = match html[lang_start..].find('"') {
                Some(pos) => lang_start + pos,
                None => {
                    search_pos = code_start + 1;
                    continue;
                }
            };

            let language = &html[lang_start..lang_end];

            let content_start = match html[lang_end..].find('>') {
                Some(pos) => lang_end + pos + 1,
                None => {
                    search_pos = code_start + 1;
                    continue;
                }
            };

            let content_end = match html[content_start..].find("</code>") {
                Some(pos) => content_start + pos,
                None => {
                    search_pos = code_start + 1;
                    continue;
                }
            };

            // Comrak escapes code block content; undo before syntect
            let decoded = html_decode(&html[content_start..content_end]);

            result.push_str(&html[last_end..code_start]);

            let highlighted = self
                .highlighter
                .highlight(&decoded, language)
                .context("Failed to highlight code block")?;

            result.push_str("<code class=\"language-");
            result.push_str(language);
            result.push_str("\">");
            result.push_str(&highlighted);
            result.push_str("</code>");

            last_end = content_end + "</code>".len();
            search_pos = last_end;
        }

        result.push_str(&html[last_end..]);

        Ok(result)
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodes the HTML entities comrak emits in code block content.
///
/// `&amp;` must decode last: code containing the literal text `&lt;`
/// arrives as `&amp;lt;`, and decoding the ampersand first would
/// collapse it to `<` in the next pass.
fn html_decode(html: &str) -> String {
    html.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
