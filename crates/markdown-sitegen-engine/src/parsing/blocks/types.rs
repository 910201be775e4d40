/// The structural type of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    /// Default when no other block type matches.
    Paragraph,
    /// `#` to `######` followed by a space; carries the level (1-6).
    Heading(u8),
    /// A ``` fenced block.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... with no gaps.
    OrderedList,
}

/// A classified block: a trimmed slice of the document and its type.
///
/// Only lives for the duration of a conversion pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub text: &'a str,
    pub kind: BlockType,
}

impl<'a> Block<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            kind: super::classify(text),
        }
    }
}
