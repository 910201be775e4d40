/// Unordered list block type: every line starts with `- `.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    pub fn is_list(block: &str) -> bool {
        block.split('\n').all(|line| line.starts_with(Self::MARKER))
    }

    /// Each item's text with the marker removed.
    pub fn items(block: &str) -> Vec<&str> {
        block
            .split('\n')
            .map(|line| line.strip_prefix(Self::MARKER).unwrap_or(line))
            .collect()
    }
}

/// Ordered list block type: line `i` starts with `"{i}. "`, counting from 1.
pub struct OrderedList;

impl OrderedList {
    pub const SEPARATOR: &'static str = ". ";

    /// The expected prefix of the `number`-th line (1-based).
    pub fn prefix(number: usize) -> String {
        format!("{number}{}", Self::SEPARATOR)
    }

    /// True if lines are numbered 1, 2, 3, ... with no gaps or repeats.
    pub fn is_list(block: &str) -> bool {
        block
            .split('\n')
            .zip(1..)
            .all(|(line, number)| line.starts_with(&Self::prefix(number)))
    }

    /// Each item's text with its own numbering prefix removed.
    ///
    /// The prefix width is computed per line, so `10. ` strips four bytes.
    pub fn items(block: &str) -> Vec<&str> {
        block
            .split('\n')
            .zip(1..)
            .map(|(line, number)| line.strip_prefix(&Self::prefix(number)).unwrap_or(line))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unordered_requires_marker_on_every_line() {
        assert!(UnorderedList::is_list("- a\n- b"));
        assert!(!UnorderedList::is_list("- a\nb\n- c"));
        assert!(!UnorderedList::is_list("-a"));
    }

    #[test]
    fn unordered_items() {
        assert_eq!(UnorderedList::items("- a\n- b c"), vec!["a", "b c"]);
    }

    #[test]
    fn ordered_must_be_sequential() {
        assert!(OrderedList::is_list("1. a\n2. b\n3. c"));
        assert!(!OrderedList::is_list("1. First\n3. Third\n2. Second"));
        assert!(!OrderedList::is_list("2. a\n3. b"));
        assert!(!OrderedList::is_list("1. a\n1. b"));
        assert!(!OrderedList::is_list("1.a"));
    }

    #[test]
    fn ordered_items_strip_multi_digit_prefixes() {
        let block = (1..=11)
            .map(|i| format!("{i}. item {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        assert!(OrderedList::is_list(&block));
        let items = OrderedList::items(&block);
        assert_eq!(items[0], "item 1");
        assert_eq!(items[9], "item 10");
        assert_eq!(items[10], "item 11");
    }
}
