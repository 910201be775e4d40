//! # Page Assembly
//!
//! Turns a Markdown document into a complete HTML page: the title comes from
//! the first `# ` heading, the body from [`convert_document`], and both are
//! substituted into a template. Root-relative links are then rewritten under
//! the site's base path.

use crate::parsing::{ParseError, convert_document};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("No h1 heading found in markdown")]
    NoHeading,
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Returns the text of the first line that starts with `# ` once trimmed.
pub fn extract_title(markdown: &str) -> Result<String, PageError> {
    markdown
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(PageError::NoHeading)
}

/// An HTML page template with `{{ Title }}` and `{{ Content }}` placeholders.
#[derive(Debug, Clone)]
pub struct PageTemplate {
    source: String,
}

impl PageTemplate {
    pub const TITLE_PLACEHOLDER: &'static str = "{{ Title }}";
    pub const CONTENT_PLACEHOLDER: &'static str = "{{ Content }}";

    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Substitutes every occurrence of both placeholders.
    pub fn render(&self, title: &str, content: &str) -> String {
        self.source
            .replace(Self::TITLE_PLACEHOLDER, title)
            .replace(Self::CONTENT_PLACEHOLDER, content)
    }
}

/// Prefixes root-relative `href` and `src` attributes with `base_path`.
///
/// A missing trailing `/` is added to `base_path`, so `/repo` and `/repo/`
/// rewrite alike. A base path of `/` (or an empty one) leaves the page unchanged.
pub fn rewrite_base_path(html: &str, base_path: &str) -> String {
    let base_path = if base_path.ends_with('/') {
        base_path.to_string()
    } else {
        format!("{base_path}/")
    };
    if base_path == "/" {
        return html.to_string();
    }
    html.replace("href=\"/", &format!("href=\"{base_path}"))
        .replace("src=\"/", &format!("src=\"{base_path}"))
}

/// Builds the final page HTML for one Markdown document.
pub fn generate_page_html(
    markdown: &str,
    template: &PageTemplate,
    base_path: &str,
) -> Result<String, PageError> {
    let title = extract_title(markdown)?;
    let content = convert_document(markdown)?.render();
    let page = template.render(&title, &content);
    Ok(rewrite_base_path(&page, base_path))
}
