use std::ops::Range;

use super::{CodeSpan, Escape};

/// Stretches of inline text no other syntax looks into: backslash escapes
/// and code spans.
///
/// Scanners that look for images, links or footnote markers outside the
/// inline parser skip these so they agree with it on what is literal.
pub struct RawZone;

impl RawZone {
    /// End of the raw stretch starting at `at`, if one starts there.
    ///
    /// An unclosed backtick run is one stretch of literal ticks, as the
    /// inline parser reads it.
    pub fn skip(s: &str, at: usize) -> Option<usize> {
        match s.as_bytes().get(at).copied()? {
            Escape::BACKSLASH => Escape::match_at(s, at).map(|_| at + 2),
            CodeSpan::TICK => Some(
                CodeSpan::match_at(s, at)
                    .map_or_else(|| at + CodeSpan::open_len(s, at), |(_, _, after)| after),
            ),
            _ => None,
        }
    }

    /// Every raw stretch in `s`, in order.
    pub fn ranges(s: &str) -> Vec<Range<usize>> {
        let mut out = vec![];
        let mut i = 0;
        while i < s.len() {
            match Self::skip(s, i) {
                Some(after) => {
                    out.push(i..after);
                    i = after;
                }
                None => i += 1,
            }
        }
        out
    }
}
