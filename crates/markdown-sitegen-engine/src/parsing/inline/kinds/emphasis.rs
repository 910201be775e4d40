use crate::parsing::inline::types::TokenKind;

/// Delimiter-bounded inline spans.
///
/// Delimiters are matched as literal substrings, never as patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Bold,
    Italic,
    Code,
}

impl Emphasis {
    /// Split order. Bold must run before italic and code.
    pub const ALL: [Emphasis; 3] = [Emphasis::Bold, Emphasis::Italic, Emphasis::Code];

    pub const fn delimiter(self) -> &'static str {
        match self {
            Emphasis::Bold => "**",
            Emphasis::Italic => "_",
            Emphasis::Code => "`",
        }
    }

    pub fn token_kind(self) -> TokenKind {
        match self {
            Emphasis::Bold => TokenKind::Bold,
            Emphasis::Italic => TokenKind::Italic,
            Emphasis::Code => TokenKind::Code,
        }
    }
}
