use crate::parsing::inline::kinds::{InlineLinkMatch, Link, RawZone};

/// A piece of an image-bearing line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSegment<'a> {
    Text(&'a str),
    Image { alt: &'a str, url: &'a str },
}

/// `![alt](url)`: link syntax behind a `!`.
pub struct Image;

impl Image {
    pub const BANG: u8 = Link::IMAGE_BANG;

    /// First image in `line` as `(offset of '!', match)`.
    pub fn find(line: &str) -> Option<(usize, InlineLinkMatch<'_>)> {
        Self::find_from(line, 0)
    }

    pub fn contains(line: &str) -> bool {
        Self::find(line).is_some()
    }

    /// Splits a line into text and image segments in source order.
    ///
    /// Empty text between images is dropped; whitespace-only text is kept so
    /// callers can decide what counts as blank.
    pub fn segments(line: &str) -> Vec<LineSegment<'_>> {
        let mut out = vec![];
        let mut pos = 0usize;
        while let Some((at, m)) = Self::find_from(line, pos) {
            if at > pos {
                out.push(LineSegment::Text(&line[pos..at]));
            }
            out.push(LineSegment::Image {
                alt: m.text,
                url: m.url,
            });
            pos = m.end;
        }
        if pos < line.len() {
            out.push(LineSegment::Text(&line[pos..]));
        }
        out
    }

    /// Images count only outside code spans, escapes and link text, so a
    /// linked badge `[![b](i.svg)](url)` stays with its link.
    fn find_from(line: &str, from: usize) -> Option<(usize, InlineLinkMatch<'_>)> {
        let b = line.as_bytes();
        let mut i = from;
        while i < b.len() {
            if let Some(after) = RawZone::skip(line, i) {
                i = after;
                continue;
            }
            if b[i] == Self::BANG
                && b.get(i + 1) == Some(&Link::OPEN)
                && let Some(m) = Link::parse_inline(line, i + 1)
            {
                return Some((i, m));
            }
            if b[i] == Link::OPEN
                && let Some(m) = Link::parse_inline(line, i)
            {
                i = m.end;
                continue;
            }
            i += 1;
        }
        None
    }
}
