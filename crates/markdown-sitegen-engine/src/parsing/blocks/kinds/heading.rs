/// ATX heading block type with owned marker constants.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: u8 = 6;

    /// Returns the heading level if `block` opens with 1-6 `#` and a space.
    pub fn level(block: &str) -> Option<u8> {
        let b = block.as_bytes();
        let hashes = b.iter().take_while(|&&c| c == Self::MARKER).count();
        if hashes == 0 || hashes > Self::MAX_LEVEL as usize {
            return None;
        }
        if b.get(hashes) != Some(&b' ') {
            return None;
        }
        u8::try_from(hashes).ok()
    }

    /// Strips the `#` run and the single space after it.
    pub fn content(block: &str, level: u8) -> &str {
        block.get(level as usize + 1..).unwrap_or_default()
    }
}
