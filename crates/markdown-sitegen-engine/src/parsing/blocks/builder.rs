use crate::html::HtmlNode;
use crate::parsing::{ParseError, inline::text_to_children};

use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
    types::{Block, BlockType},
};

/// Converts one classified block into its HTML node.
///
/// Every block type except code has its text sent through inline parsing;
/// code content is emitted literally inside `<pre><code>`.
pub fn block_to_html_node(block: &Block<'_>) -> Result<HtmlNode, ParseError> {
    let text = block.text;
    let node = match block.kind {
        BlockType::Paragraph => {
            HtmlNode::parent("p", text_to_children(&Paragraph::content(text))?)
        }
        BlockType::Heading(level) => HtmlNode::parent(
            format!("h{level}"),
            text_to_children(Heading::content(text, level))?,
        ),
        BlockType::Code => HtmlNode::parent(
            "pre",
            vec![HtmlNode::leaf("code", CodeFence::content(text))],
        ),
        BlockType::Quote => {
            HtmlNode::parent("blockquote", text_to_children(&BlockQuote::content(text))?)
        }
        BlockType::UnorderedList => list_node("ul", UnorderedList::items(text))?,
        BlockType::OrderedList => list_node("ol", OrderedList::items(text))?,
    };
    Ok(node)
}

fn list_node(tag: &str, items: Vec<&str>) -> Result<HtmlNode, ParseError> {
    let children = items
        .into_iter()
        .map(|item| Ok(HtmlNode::parent("li", text_to_children(item)?)))
        .collect::<Result<Vec<_>, ParseError>>()?;
    Ok(HtmlNode::parent(tag, children))
}
