pub mod html;
pub mod io;
pub mod page;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use html::{Attributes, HtmlNode, NodeError, NodeParts};
pub use io::*;
pub use page::{PageError, PageTemplate, extract_title, generate_page_html, rewrite_base_path};
pub use parsing::{ParseError, convert_document, markdown_to_html};
