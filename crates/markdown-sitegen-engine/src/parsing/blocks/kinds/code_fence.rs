/// Fenced code block type with owned fence constant.
///
/// Only bare ``` fences are recognised; an info string on the opening line
/// (```` ```rust ````) disqualifies the block.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// True if `block` opens with a fence line and ends with a fence.
    pub fn is_fenced(block: &str) -> bool {
        block
            .strip_prefix(Self::FENCE)
            .and_then(|rest| rest.strip_prefix('\n'))
            .is_some_and(|rest| rest.ends_with(Self::FENCE))
    }

    /// The literal code between the fences, minus at most one leading newline.
    ///
    /// Callers must check [`CodeFence::is_fenced`] first.
    pub fn content(block: &str) -> &str {
        let len = Self::FENCE.len();
        let inner = block
            .get(len..block.len().saturating_sub(len))
            .unwrap_or_default();
        inner.strip_prefix('\n').unwrap_or(inner)
    }
}
