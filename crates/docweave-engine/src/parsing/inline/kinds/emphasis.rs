use crate::parsing::inline::types::Style;

/// What a matched delimiter pair does to the style of its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    BoldItalic,
    Bold,
    Italic,
    Strikethrough,
    Subscript,
    Superscript,
}

impl Effect {
    #[must_use]
    pub fn apply(self, mut style: Style) -> Style {
        match self {
            Effect::BoldItalic => {
                style.bold = true;
                style.italic = true;
            }
            Effect::Bold => style.bold = true,
            Effect::Italic => style.italic = true,
            Effect::Strikethrough => style.strikethrough = true,
            Effect::Subscript => style.subscript = true,
            Effect::Superscript => style.superscript = true,
        }
        style
    }
}

/// One emphasis delimiter: `len` repeats of `marker`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter {
    pub marker: u8,
    pub len: usize,
    pub effect: Effect,
}

impl Delimiter {
    const fn new(marker: u8, len: usize, effect: Effect) -> Self {
        Self {
            marker,
            len,
            effect,
        }
    }
}

/// Emphasis delimiters in resolution order.
///
/// For a given marker, longer delimiters come first so `***x***` is never
/// consumed as bold around `*x*`.
pub const DELIMITERS: &[Delimiter] = &[
    Delimiter::new(b'*', 3, Effect::BoldItalic),
    Delimiter::new(b'_', 3, Effect::BoldItalic),
    Delimiter::new(b'*', 2, Effect::Bold),
    Delimiter::new(b'_', 2, Effect::Bold),
    Delimiter::new(b'*', 1, Effect::Italic),
    Delimiter::new(b'_', 1, Effect::Italic),
    Delimiter::new(b'~', 2, Effect::Strikethrough),
    Delimiter::new(b'~', 1, Effect::Subscript),
    Delimiter::new(b'^', 1, Effect::Superscript),
];

pub struct Emphasis;

impl Emphasis {
    /// Marker whose delimiters may not touch alphanumerics on their outer side.
    pub const INTRAWORD_SENSITIVE: u8 = b'_';

    pub fn is_marker(b: u8) -> bool {
        DELIMITERS.iter().any(|d| d.marker == b)
    }

    /// Delimiters for `marker` that fit in a run of `run` repeats, longest first.
    pub fn candidates(marker: u8, run: usize) -> impl Iterator<Item = &'static Delimiter> {
        DELIMITERS
            .iter()
            .filter(move |d| d.marker == marker && d.len <= run)
    }

    /// True when a byte on the outer side of a delimiter blocks it.
    pub fn blocks_outer(marker: u8, neighbor: Option<u8>) -> bool {
        marker == Self::INTRAWORD_SENSITIVE && neighbor.is_some_and(|c| c.is_ascii_alphanumeric())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_are_longest_first() {
        let lens: Vec<_> = Emphasis::candidates(b'*', 3).map(|d| d.len).collect();
        assert_eq!(lens, vec![3, 2, 1]);
    }

    #[test]
    fn candidates_respect_run_length() {
        let lens: Vec<_> = Emphasis::candidates(b'~', 1).map(|d| d.len).collect();
        assert_eq!(lens, vec![1]);
    }

    #[test]
    fn bold_italic_sets_both_flags() {
        let s = Effect::BoldItalic.apply(Style::default());
        assert!(s.bold && s.italic);
        assert!(!s.strikethrough);
    }

    #[test]
    fn effects_accumulate() {
        let s = Effect::Italic.apply(Effect::Bold.apply(Style::default()));
        assert!(s.bold && s.italic);
    }

    #[test]
    fn underscore_blocked_by_word_chars() {
        assert!(Emphasis::blocks_outer(b'_', Some(b'a')));
        assert!(!Emphasis::blocks_outer(b'_', Some(b' ')));
        assert!(!Emphasis::blocks_outer(b'*', Some(b'a')));
        assert!(!Emphasis::blocks_outer(b'_', None));
    }

    #[test]
    fn markers() {
        assert!(Emphasis::is_marker(b'^'));
        assert!(!Emphasis::is_marker(b'#'));
    }
}
