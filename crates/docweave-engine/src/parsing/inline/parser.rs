use crate::parsing::references::ReferenceTables;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Effect, Emphasis, Escape, Link as LinkSyntax},
    types::{Link, Style, StyledRun},
};

/// Read-only inputs shared by every inline parse of one document.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineContext<'a> {
    /// Link definitions for `[text][label]`. Without them reference links
    /// stay literal.
    pub references: Option<&'a ReferenceTables>,
    /// Parse emphasis inside link text instead of keeping it literal.
    pub nested_link_emphasis: bool,
}

/// Parses inline markup into styled runs with no reference definitions.
pub fn parse_inline(s: &str) -> Vec<StyledRun> {
    parse_inline_with(s, &InlineContext::default())
}

/// Parses inline markup into a sequence of [`StyledRun`]s.
///
/// # Raw Zone Precedence
/// Backslash escapes and code spans are resolved before emphasis, so
/// `` `**x**` `` is code and `\*x\*` is literal text. Links bind tighter
/// than emphasis: a marker inside link text never pairs with one outside.
///
/// # Returns
/// Runs covering all visible text in order. Adjacent runs never share the
/// same style and link; empty runs are never produced.
pub fn parse_inline_with(s: &str, ctx: &InlineContext<'_>) -> Vec<StyledRun> {
    let mut parser = InlineParser {
        s,
        ctx: *ctx,
        out: Vec::new(),
    };
    parser.parse_range(0, s.len(), Style::default(), None);
    parser.out
}

/// A run of one emphasis marker and what it was paired into.
#[derive(Debug)]
struct DelimRun {
    marker: u8,
    /// Repeats not used by any pair; these print literally.
    remaining: usize,
    can_open: bool,
    can_close: bool,
    /// Effects ended here, innermost first.
    closes: Vec<Effect>,
    /// Effects started here, innermost first.
    opens: Vec<Effect>,
}

impl DelimRun {
    /// Flanking rules for the run of `len` markers at `at` in `s[start..]`.
    ///
    /// A run opens when the next character is not whitespace and closes when
    /// the previous one is not. `_` additionally must not touch an
    /// alphanumeric on its outer side.
    fn new(s: &str, start: usize, at: usize, len: usize) -> Self {
        let b = s.as_bytes();
        let marker = b[at];
        let before = (at > start).then(|| b[at - 1]);
        let after = b.get(at + len).copied();
        Self {
            marker,
            remaining: len,
            can_open: after.is_some_and(|c| !c.is_ascii_whitespace())
                && !Emphasis::blocks_outer(marker, before),
            can_close: before.is_some_and(|c| !c.is_ascii_whitespace())
                && !Emphasis::blocks_outer(marker, after),
            closes: vec![],
            opens: vec![],
        }
    }
}

/// One inline range split into flat pieces before delimiters are paired.
#[derive(Debug)]
enum Piece<'s> {
    Text(String),
    Code(&'s str),
    Delim(DelimRun),
    /// Link whose text is `s[text.0..text.1]`.
    Link { target: Link, text: (usize, usize) },
    Image { target: Link, alt: &'s str },
}

struct InlineParser<'s, 'c> {
    s: &'s str,
    ctx: InlineContext<'c>,
    out: Vec<StyledRun>,
}

impl<'s> InlineParser<'s, '_> {
    /// Parses `s[start..end]` with `style` (and `link`) as the base format.
    ///
    /// Recurses only into link text, which cannot hold another link, so the
    /// depth is bounded whatever the input.
    fn parse_range(&mut self, start: usize, end: usize, style: Style, link: Option<&Link>) {
        let mut pieces = self.split(start, end, link.is_some());
        pair_delimiters(&mut pieces);
        self.emit(&pieces, style, link);
    }

    fn split(&self, start: usize, end: usize, in_link: bool) -> Vec<Piece<'s>> {
        let s: &'s str = self.s;
        let mut cur = Cursor::new(&s[..end]);
        cur.seek(start);
        let mut pieces = Vec::new();
        let mut text = String::new();

        while let Some(b) = cur.peek() {
            let at = cur.pos();
            match b {
                Escape::BACKSLASH => {
                    if let Some(c) = Escape::match_at(cur.s, at) {
                        text.push(c);
                        cur.bump_n(2);
                        continue;
                    }
                }
                CodeSpan::TICK => {
                    match CodeSpan::match_at(cur.s, at) {
                        Some((inner_start, inner_end, after)) => {
                            flush_text(&mut pieces, &mut text);
                            pieces.push(Piece::Code(trim_code(&cur.s[inner_start..inner_end])));
                            cur.seek(after);
                        }
                        None => {
                            let run = cur.run_len(CodeSpan::TICK);
                            text.push_str(&cur.s[at..at + run]);
                            cur.bump_n(run);
                        }
                    }
                    continue;
                }
                LinkSyntax::IMAGE_BANG if cur.peek_at(1) == Some(LinkSyntax::OPEN) => {
                    if let Some(m) = LinkSyntax::parse_inline(cur.s, at + 1) {
                        flush_text(&mut pieces, &mut text);
                        pieces.push(Piece::Image {
                            target: Link {
                                url: m.url.to_string(),
                                title: m.title.map(str::to_string),
                            },
                            alt: if m.text.is_empty() { m.url } else { m.text },
                        });
                        cur.seek(m.end);
                        continue;
                    }
                }
                LinkSyntax::OPEN if !in_link => {
                    if let Some((piece, after)) = self.link_at(cur.s, at) {
                        flush_text(&mut pieces, &mut text);
                        pieces.push(piece);
                        cur.seek(after);
                        continue;
                    }
                }
                _ if Emphasis::is_marker(b) => {
                    let run = cur.run_len(b);
                    flush_text(&mut pieces, &mut text);
                    pieces.push(Piece::Delim(DelimRun::new(cur.s, start, at, run)));
                    cur.bump_n(run);
                    continue;
                }
                _ => {}
            }
            if let Some(c) = cur.bump_char() {
                text.push(c);
            }
        }

        flush_text(&mut pieces, &mut text);
        pieces
    }

    /// Inline `[text](url)` or, with definitions available, `[text][label]`.
    fn link_at(&self, s: &str, at: usize) -> Option<(Piece<'s>, usize)> {
        if let Some(m) = LinkSyntax::parse_inline(s, at) {
            let target = Link {
                url: m.url.to_string(),
                title: m.title.map(str::to_string),
            };
            let text = (at + 1, at + 1 + m.text.len());
            return Some((Piece::Link { target, text }, m.end));
        }

        let refs = self.ctx.references?;
        let m = LinkSyntax::parse_reference(s, at)?;
        let def = refs.link(m.label)?;
        let target = Link {
            url: def.url.clone(),
            title: def.title.clone(),
        };
        let text = (at + 1, at + 1 + m.text.len());
        Some((Piece::Link { target, text }, m.end))
    }

    /// Writes paired pieces out as runs.
    fn emit(&mut self, pieces: &[Piece<'_>], base: Style, link: Option<&Link>) {
        // Style in force after each open effect; pairs nest, so a stack fits.
        let mut styles: Vec<Style> = Vec::new();

        for piece in pieces {
            let style = styles.last().copied().unwrap_or(base);
            match piece {
                Piece::Text(text) => self.push_run(text, style, link),
                Piece::Code(code) => {
                    let mut code_style = style;
                    code_style.code = true;
                    self.push_run(code, code_style, link);
                }
                // Inside link text an image keeps the outer link.
                Piece::Image { target, alt } => {
                    self.push_run(alt, style, Some(link.unwrap_or(target)))
                }
                Piece::Link { target, text } => self.link_text(*text, style, target),
                Piece::Delim(run) => {
                    for _ in &run.closes {
                        styles.pop();
                    }
                    let style = styles.last().copied().unwrap_or(base);
                    let literal = (run.marker as char).to_string().repeat(run.remaining);
                    self.push_run(&literal, style, link);

                    let mut style = style;
                    for effect in run.opens.iter().rev() {
                        style = effect.apply(style);
                        styles.push(style);
                    }
                }
            }
        }
    }

    fn link_text(&mut self, (start, end): (usize, usize), style: Style, target: &Link) {
        let s = self.s;
        let badge = s[start..end]
            .strip_prefix(LinkSyntax::IMAGE_BANG as char)
            .and_then(|rest| LinkSyntax::parse_inline(rest, 0))
            .filter(|m| m.end == end - start - 1);

        if start == end {
            self.push_run(&target.url, style, Some(target));
        } else if let Some(image) = badge {
            // `[![alt](img)](url)` reads as its alt text.
            self.push_run(image.text, style, Some(target));
        } else if self.ctx.nested_link_emphasis {
            self.parse_range(start, end, style, Some(target));
        } else {
            self.push_run(&s[start..end], style, Some(target));
        }
    }

    /// Appends a run, merging it into the previous one when formats match.
    fn push_run(&mut self, text: &str, style: Style, link: Option<&Link>) {
        if text.is_empty() {
            return;
        }
        match self.out.last_mut() {
            Some(last) if last.style == style && last.link.as_ref() == link => {
                last.text.push_str(text);
            }
            _ => self.out.push(StyledRun {
                text: text.to_string(),
                style,
                link: link.cloned(),
            }),
        }
    }
}

fn flush_text(pieces: &mut Vec<Piece<'_>>, text: &mut String) {
    if !text.is_empty() {
        pieces.push(Piece::Text(std::mem::take(text)));
    }
}

fn delim<'p>(pieces: &'p mut [Piece<'_>], i: usize) -> Option<&'p mut DelimRun> {
    match &mut pieces[i] {
        Piece::Delim(run) => Some(run),
        _ => None,
    }
}

/// Pairs delimiter runs with an explicit opener stack.
///
/// Each closer takes the nearest waiting opener of the same marker. Openers
/// above it on the stack can no longer pair and stay literal. The pair uses
/// the longest delimiter both runs can still supply, taken from the inner
/// ends of the runs, and a run keeps pairing while it has repeats left.
fn pair_delimiters(pieces: &mut [Piece<'_>]) {
    let mut openers: Vec<usize> = Vec::new();
    // Waiting openers per marker byte, so a closer with no partner costs O(1).
    let mut waiting = [0usize; 256];

    for i in 0..pieces.len() {
        let Some(run) = delim(pieces, i) else {
            continue;
        };
        let (marker, can_open, can_close) = (run.marker, run.can_open, run.can_close);

        if can_close {
            while waiting[marker as usize] > 0 {
                let Some(k) = openers
                    .iter()
                    .rposition(|&j| matches!(&pieces[j], Piece::Delim(o) if o.marker == marker))
                else {
                    break;
                };
                for &j in &openers[k + 1..] {
                    if let Piece::Delim(o) = &pieces[j] {
                        waiting[o.marker as usize] -= 1;
                    }
                }
                openers.truncate(k + 1);

                let j = openers[k];
                let available = match (&pieces[j], &pieces[i]) {
                    (Piece::Delim(o), Piece::Delim(c)) => o.remaining.min(c.remaining),
                    _ => 0,
                };
                let Some(d) = Emphasis::candidates(marker, available).next() else {
                    break;
                };

                if let Some(opener) = delim(pieces, j) {
                    opener.remaining -= d.len;
                    opener.opens.push(d.effect);
                    if opener.remaining == 0 {
                        openers.pop();
                        waiting[marker as usize] -= 1;
                    }
                }
                let Some(closer) = delim(pieces, i) else {
                    break;
                };
                closer.remaining -= d.len;
                closer.closes.push(d.effect);
                if closer.remaining == 0 {
                    break;
                }
            }
        }

        if can_open && delim(pieces, i).is_some_and(|r| r.remaining > 0) {
            openers.push(i);
            waiting[marker as usize] += 1;
        }
    }
}

/// Strips one space from each side of code span content when both are present.
fn trim_code(s: &str) -> &str {
    let b = s.as_bytes();
    if b.len() >= 2 && b[0] == b' ' && b[b.len() - 1] == b' ' && !s.trim().is_empty() {
        &s[1..s.len() - 1]
    } else {
        s
    }
}
