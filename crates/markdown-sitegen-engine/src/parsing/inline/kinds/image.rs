use std::sync::OnceLock;

use regex::Regex;

use super::link::LinkMatch;

/// Image syntax: `![alt](url)`.
///
/// Alt text may not contain brackets and the URL may not contain parens;
/// nested structures are not recognised.
pub struct Image;

impl Image {
    /// Finds every image in `text`, left to right.
    pub fn find_all(text: &str) -> Vec<LinkMatch<'_>> {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = IMAGE_REGEX.get_or_init(|| {
            Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid image regex")
        });

        re.captures_iter(text)
            .filter_map(|caps| LinkMatch::from_captures(&caps))
            .collect()
    }
}
