use crate::parsing::inline::kinds::{Escape, RawZone};

/// `[text](url "title")` recognized at some offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineLinkMatch<'a> {
    pub text: &'a str,
    pub url: &'a str,
    pub title: Option<&'a str>,
    /// Byte offset just past the closing `)`.
    pub end: usize,
}

/// `[text][label]` (or collapsed `[text][]`) recognized at some offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceLinkMatch<'a> {
    pub text: &'a str,
    /// Label to look up; the link text itself for the collapsed form.
    pub label: &'a str,
    /// Byte offset just past the final `]`.
    pub end: usize,
}

/// Link syntax. Images reuse it behind a leading `!`.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const DEST_OPEN: u8 = b'(';
    pub const DEST_CLOSE: u8 = b')';
    pub const IMAGE_BANG: u8 = b'!';

    /// Finds the `]` balancing the `[` at `open`, honoring nesting and escapes.
    pub fn close_bracket(s: &str, open: usize) -> Option<usize> {
        let b = s.as_bytes();
        if b.get(open) != Some(&Self::OPEN) {
            return None;
        }
        let mut depth = 0usize;
        let mut i = open;
        while i < b.len() {
            match b[i] {
                Escape::BACKSLASH => i += 1,
                Self::OPEN => depth += 1,
                Self::CLOSE => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(i);
                    }
                }
                _ => {}
            }
            i += 1;
        }
        None
    }

    /// Parses `[text](destination)` starting at `at`.
    pub fn parse_inline(s: &str, at: usize) -> Option<InlineLinkMatch<'_>> {
        let close = Self::close_bracket(s, at)?;
        let b = s.as_bytes();
        if b.get(close + 1) != Some(&Self::DEST_OPEN) {
            return None;
        }

        let dest_start = close + 2;
        let mut depth = 1usize;
        let mut i = dest_start;
        while i < b.len() {
            match b[i] {
                Escape::BACKSLASH => i += 1,
                Self::DEST_OPEN => depth += 1,
                Self::DEST_CLOSE => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                _ => {}
            }
            i += 1;
        }
        if i >= b.len() {
            return None;
        }

        let (url, title) = Self::split_destination(&s[dest_start..i])?;
        Some(InlineLinkMatch {
            text: &s[at + 1..close],
            url,
            title,
            end: i + 1,
        })
    }

    /// Parses `[text][label]` or `[text][]` starting at `at`.
    pub fn parse_reference(s: &str, at: usize) -> Option<ReferenceLinkMatch<'_>> {
        let close = Self::close_bracket(s, at)?;
        let b = s.as_bytes();
        if b.get(close + 1) != Some(&Self::OPEN) {
            return None;
        }

        let label_start = close + 2;
        let label_len = s[label_start..].find(Self::CLOSE as char)?;
        let label = &s[label_start..label_start + label_len];
        if label.contains(Self::OPEN as char) {
            return None;
        }

        let text = &s[at + 1..close];
        Some(ReferenceLinkMatch {
            text,
            label: if label.trim().is_empty() { text } else { label },
            end: label_start + label_len + 1,
        })
    }

    /// Finds the first inline link in `s` that is not an image and not
    /// inside a code span or escape.
    pub fn find_inline(s: &str) -> Option<(usize, InlineLinkMatch<'_>)> {
        let b = s.as_bytes();
        let mut i = 0;
        while i < b.len() {
            if let Some(after) = RawZone::skip(s, i) {
                i = after;
                continue;
            }
            if b[i] == Self::IMAGE_BANG && b.get(i + 1) == Some(&Self::OPEN) {
                i = Self::parse_inline(s, i + 1).map_or(i + 1, |m| m.end);
                continue;
            }
            if b[i] == Self::OPEN
                && let Some(m) = Self::parse_inline(s, i)
            {
                return Some((i, m));
            }
            i += 1;
        }
        None
    }

    /// Splits a link destination into URL and optional title.
    ///
    /// Accepts `url`, `<url>`, and either form followed by a title quoted
    /// with `"…"`, `'…'` or `(…)`. Anything else after the URL means the
    /// text is not a link destination.
    pub fn split_destination(inner: &str) -> Option<(&str, Option<&str>)> {
        let t = inner.trim();
        let (url, rest) = if let Some(stripped) = t.strip_prefix('<') {
            let gt = stripped.find('>')?;
            (&stripped[..gt], stripped[gt + 1..].trim())
        } else {
            let sp = t.find(char::is_whitespace).unwrap_or(t.len());
            (&t[..sp], t[sp..].trim())
        };

        if rest.is_empty() {
            return Some((url, None));
        }
        Some((url, Some(unquote_title(rest)?)))
    }
}

fn unquote_title(s: &str) -> Option<&str> {
    let b = s.as_bytes();
    if b.len() < 2 {
        return None;
    }
    let quoted = matches!(
        (b[0], b[b.len() - 1]),
        (b'"', b'"') | (b'\'', b'\'') | (b'(', b')')
    );
    quoted.then(|| &s[1..s.len() - 1])
}
