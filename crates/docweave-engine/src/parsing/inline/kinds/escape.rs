/// Backslash escapes (`\*` is a literal asterisk).
pub struct Escape;

impl Escape {
    pub const BACKSLASH: u8 = b'\\';

    /// Returns the escaped character when `at` starts a valid escape.
    ///
    /// Only ASCII punctuation can be escaped; any other backslash is literal.
    pub fn match_at(s: &str, at: usize) -> Option<char> {
        let b = s.as_bytes();
        if b.get(at) != Some(&Self::BACKSLASH) {
            return None;
        }
        b.get(at + 1)
            .filter(|c| c.is_ascii_punctuation())
            .map(|&c| c as char)
    }
}
