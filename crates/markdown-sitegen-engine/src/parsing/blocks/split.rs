/// The blank-line separator between blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Splits a document into trimmed, non-empty blocks, in document order.
pub fn split_blocks(document: &str) -> Vec<&str> {
    document
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_has_no_blocks() {
        assert!(split_blocks("").is_empty());
    }

    #[test]
    fn blank_lines_only() {
        assert!(split_blocks("\n\n\n").is_empty());
    }

    #[test]
    fn splits_on_blank_lines() {
        let md = "This is **bolded** paragraph

This is another paragraph with _italic_ text and `code` here
This is the same paragraph on a new line

- This is a list
- with items
";
        assert_eq!(
            split_blocks(md),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line",
                "- This is a list\n- with items",
            ]
        );
    }

    #[test]
    fn excess_blank_lines_are_dropped() {
        assert_eq!(
            split_blocks("first\n\n\n\n\nsecond"),
            vec!["first", "second"]
        );
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(
            split_blocks("   # Title   \n\n\t para \t"),
            vec!["# Title", "para"]
        );
    }

    #[test]
    fn single_newline_does_not_split() {
        assert_eq!(split_blocks("a\nb"), vec!["a\nb"]);
    }
}
