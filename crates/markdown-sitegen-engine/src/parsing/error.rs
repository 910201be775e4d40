/// Errors raised while converting Markdown to an HTML node tree.
///
/// Conversion is fail-fast: any error aborts the whole document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid markdown: unterminated `{delimiter}` delimiter in {text:?}")]
    UnterminatedDelimiter {
        delimiter: &'static str,
        text: String,
    },
}
