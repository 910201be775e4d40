/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when no other
/// block type matches. Inline parsing is applied to paragraph content.
pub struct Paragraph;

impl Paragraph {
    /// The paragraph's lines joined by single spaces.
    pub fn content(block: &str) -> String {
        block.lines().collect::<Vec<_>>().join(" ")
    }
}
