use std::ops::Range;
use std::sync::OnceLock;

use regex::{Captures, Regex};

/// A matched image or link: the byte range of the whole construct in the
/// searched text, plus its display text and URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMatch<'a> {
    pub range: Range<usize>,
    pub text: &'a str,
    pub url: &'a str,
}

impl<'a> LinkMatch<'a> {
    pub(super) fn from_captures(caps: &Captures<'a>) -> Option<Self> {
        let full = caps.get(0)?;
        Some(Self {
            range: full.range(),
            text: caps.get(1)?.as_str(),
            url: caps.get(2)?.as_str(),
        })
    }
}

/// Link syntax: `[text](url)`, never directly after `!` (that is an image).
pub struct Link;

impl Link {
    /// The marker that turns link syntax into image syntax.
    pub const IMAGE_MARKER: u8 = b'!';

    /// Finds every link in `text`, left to right.
    pub fn find_all(text: &str) -> Vec<LinkMatch<'_>> {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = LINK_REGEX.get_or_init(|| {
            Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid link regex")
        });

        let bytes = text.as_bytes();
        let mut out = vec![];
        let mut pos = 0;

        while let Some(caps) = re.captures_at(text, pos) {
            let Some(m) = LinkMatch::from_captures(&caps) else {
                break;
            };
            // No look-behind in `regex`: reject and retry one byte further on.
            if m.range.start > 0 && bytes[m.range.start - 1] == Self::IMAGE_MARKER {
                pos = m.range.start + 1;
                continue;
            }
            pos = m.range.end;
            out.push(m);
        }
        out
    }
}
