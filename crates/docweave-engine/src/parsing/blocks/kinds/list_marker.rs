use crate::parsing::lines::indentation;

/// A list item line split into indentation, marker type and item text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker<'a> {
    /// Leading indentation in columns.
    pub indent: usize,
    /// `1.`-style marker rather than a bullet.
    pub ordered: bool,
    pub text: &'a str,
}

impl<'a> ListMarker<'a> {
    pub const BULLETS: [u8; 3] = [b'*', b'-', b'+'];
    pub const ORDERED_SUFFIX: u8 = b'.';

    /// Recognizes `- x`, `* x`, `+ x` and `12. x`, optionally indented.
    pub fn parse(line: &'a str) -> Option<Self> {
        let (indent, idx) = indentation(line);
        let rest = &line[idx..];
        let b = rest.as_bytes();

        let (ordered, marker_len) = if b.first().is_some_and(|c| Self::BULLETS.contains(c)) {
            (false, 1)
        } else {
            let digits = b.iter().take_while(|c| c.is_ascii_digit()).count();
            if digits == 0 || b.get(digits) != Some(&Self::ORDERED_SUFFIX) {
                return None;
            }
            (true, digits + 1)
        };

        let after = &rest[marker_len..];
        if !after.starts_with([' ', '\t']) {
            return None;
        }

        Some(Self {
            indent,
            ordered,
            text: after.trim(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("- a", 0, false, "a")]
    #[case("* a", 0, false, "a")]
    #[case("+ a", 0, false, "a")]
    #[case("  - nested", 2, false, "nested")]
    #[case("1. first", 0, true, "first")]
    #[case("    42. deep", 4, true, "deep")]
    #[case("\t- tabbed", 4, false, "tabbed")]
    fn parse_list_marker(
        #[case] line: &str,
        #[case] indent: usize,
        #[case] ordered: bool,
        #[case] text: &str,
    ) {
        assert_eq!(
            ListMarker::parse(line),
            Some(ListMarker {
                indent,
                ordered,
                text
            })
        );
    }

    #[rstest]
    #[case("-a")]
    #[case("**bold**")]
    #[case("1.5 apples")]
    #[case("---")]
    #[case("a. not ordered")]
    #[case("")]
    fn not_a_list_marker(#[case] line: &str) {
        assert_eq!(ListMarker::parse(line), None);
    }
}
