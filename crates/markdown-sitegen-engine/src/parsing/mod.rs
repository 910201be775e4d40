//! # Markdown Parsing
//!
//! Converts a document into an `HtmlNode` tree rooted at a `div`.
//!
//! Block segmentation and classification live in `blocks`; inline
//! tokenization lives in `inline`. Conversion is a pure function of its
//! input: no shared state, no I/O.

pub mod blocks;
mod error;
pub mod inline;

pub use error::ParseError;

use crate::html::HtmlNode;

use blocks::{Block, block_to_html_node, split_blocks};

/// Splits and classifies every block of `document`.
pub fn parse_blocks(document: &str) -> Vec<Block<'_>> {
    split_blocks(document).into_iter().map(Block::new).collect()
}

/// Converts a whole document into a single `div` node.
///
/// Fails on the first malformed block; no partial tree is returned.
pub fn convert_document(document: &str) -> Result<HtmlNode, ParseError> {
    let blocks = parse_blocks(document);
    log::debug!("Converting document with {} blocks", blocks.len());

    let children = blocks
        .iter()
        .map(block_to_html_node)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HtmlNode::parent("div", children))
}

/// Converts `document` and renders it to an HTML string.
pub fn markdown_to_html(document: &str) -> Result<String, ParseError> {
    Ok(convert_document(document)?.render())
}
