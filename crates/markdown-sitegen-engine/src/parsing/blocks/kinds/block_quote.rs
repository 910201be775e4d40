/// Blockquote block type with owned delimiter constant.
///
/// All blockquote syntax knowledge lives here, not in classifier code.
/// Nested quotes are not supported: every leading `>` is stripped.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// True if every line of `block` starts with `>`.
    pub fn is_quote(block: &str) -> bool {
        block.split('\n').all(|line| line.starts_with(Self::PREFIX))
    }

    /// Strips all leading `>` from a line, then surrounding whitespace.
    pub fn strip_prefixes(line: &str) -> &str {
        line.trim_start_matches(Self::PREFIX).trim()
    }

    /// The quote's text with its lines joined by single spaces.
    pub fn content(block: &str) -> String {
        block
            .split('\n')
            .map(Self::strip_prefixes)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
