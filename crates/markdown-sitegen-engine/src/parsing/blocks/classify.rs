use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockType,
};

/// Classifies a single trimmed block by its structure alone.
///
/// Checks run in priority order: heading, code, quote, unordered list,
/// ordered list; anything else is a paragraph.
pub fn classify(block: &str) -> BlockType {
    if let Some(level) = Heading::level(block) {
        return BlockType::Heading(level);
    }
    if CodeFence::is_fenced(block) {
        return BlockType::Code;
    }
    if BlockQuote::is_quote(block) {
        return BlockType::Quote;
    }
    if UnorderedList::is_list(block) {
        return BlockType::UnorderedList;
    }
    if OrderedList::is_list(block) {
        return BlockType::OrderedList;
    }
    BlockType::Paragraph
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Heading 1", 1)]
    #[case("## Heading 2", 2)]
    #[case("### Heading 3", 3)]
    #[case("#### Heading 4", 4)]
    #[case("##### Heading 5", 5)]
    #[case("###### Heading 6", 6)]
    fn headings(#[case] block: &str, #[case] level: u8) {
        assert_eq!(classify(block), BlockType::Heading(level));
    }

    #[rstest]
    #[case::no_space("#NoSpace")]
    #[case::mid_line("Not a # heading")]
    #[case::too_deep("####### Seven")]
    #[case::empty("")]
    #[case::code_missing_closing("```\nprint('hello')")]
    #[case::code_missing_opening("print('hello')\n```")]
    #[case::quote_missing_marker(">Line 1\nLine 2\n>Line 3")]
    #[case::unordered_missing_marker("- Item 1\nItem 2\n- Item 3")]
    #[case::unordered_no_space("-Item")]
    #[case::ordered_gap("1. First\n3. Third\n2. Second")]
    #[case::ordered_not_from_one("2. First\n3. Second")]
    #[case::ordered_no_space("1.First")]
    #[case::plain("Just a paragraph\nover two lines")]
    fn paragraphs(#[case] block: &str) {
        assert_eq!(classify(block), BlockType::Paragraph);
    }

    #[rstest]
    #[case("```\nprint('hello')\n```")]
    #[case("```\ndef foo():\n    return 42\n```")]
    #[case("```\n```")]
    fn code_blocks(#[case] block: &str) {
        assert_eq!(classify(block), BlockType::Code);
    }

    #[rstest]
    #[case(">Quote")]
    #[case(">Line 1\n>Line 2\n>Line 3")]
    #[case("> Quote with space\n> Another line")]
    fn quotes(#[case] block: &str) {
        assert_eq!(classify(block), BlockType::Quote);
    }

    #[rstest]
    #[case("- Item 1")]
    #[case("- Item 1\n- Item 2\n- Item 3")]
    fn unordered_lists(#[case] block: &str) {
        assert_eq!(classify(block), BlockType::UnorderedList);
    }

    #[rstest]
    #[case("1. Item")]
    #[case("1. First\n2. Second\n3. Third")]
    fn ordered_lists(#[case] block: &str) {
        assert_eq!(classify(block), BlockType::OrderedList);
    }

    #[test]
    fn heading_wins_over_other_shapes() {
        assert_eq!(classify("# - not a list"), BlockType::Heading(1));
    }

    #[test]
    fn fenced_quote_marker_is_code() {
        assert_eq!(classify("```\n> quoted\n```"), BlockType::Code);
    }
}
