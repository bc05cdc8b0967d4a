use crate::parsing::{
    inline::kinds::Link,
    lines::is_blank,
    references::definitions::{FootnoteDefinition, LinkDefinitionLine},
};

use super::kinds::{
    BlockQuote, CodeFence, FenceKind, Heading, Image, ListMarker, Table, ThematicBreak,
};

/// Classification of a single line, with the captures the builder needs.
///
/// This is phase 1 of block parsing: each line is classified on its own. The
/// only outside fact is whether a code fence is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    CodeFenceStart { kind: FenceKind, info: &'a str },
    CodeFenceEnd,
    /// A line inside an open fence. Never parsed further.
    CodeBlockContent,
    Heading { level: u8, text: &'a str },
    ListItem(ListMarker<'a>),
    /// De-marked quote text (`> x` → `x`).
    Blockquote { text: &'a str },
    HorizontalRule,
    TableRow,
    TableSeparator,
    FootnoteDefinition,
    LinkDefinition,
    /// Contains `![alt](url)` somewhere.
    Image,
    /// Contains `[text](url)` somewhere.
    InlineLink,
    Paragraph,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies `line`. `open_fence` is the kind of the enclosing code
    /// fence, if any.
    ///
    /// Precedence, first match wins: code content, fence, blank, heading,
    /// list item, blockquote, rule, table, footnote definition, link
    /// definition, image, inline link, paragraph.
    pub fn classify<'a>(&self, line: &'a str, open_fence: Option<FenceKind>) -> LineKind<'a> {
        let fence = CodeFence::sig(line);
        if let Some(kind) = open_fence {
            return if CodeFence::closes(kind, fence) {
                LineKind::CodeFenceEnd
            } else {
                LineKind::CodeBlockContent
            };
        }
        if let Some(sig) = fence {
            return LineKind::CodeFenceStart {
                kind: sig.kind,
                info: sig.info,
            };
        }
        if is_blank(line) {
            return LineKind::Blank;
        }
        if let Some((level, text)) = Heading::parse(line) {
            return LineKind::Heading { level, text };
        }
        if let Some(marker) = ListMarker::parse(line) {
            return LineKind::ListItem(marker);
        }
        if let Some(text) = BlockQuote::strip_marker(line) {
            return LineKind::Blockquote { text };
        }
        if ThematicBreak::matches(line) {
            return LineKind::HorizontalRule;
        }
        if Table::is_separator(line) {
            return LineKind::TableSeparator;
        }
        if Table::is_row(line) {
            return LineKind::TableRow;
        }
        if FootnoteDefinition::parse(line).is_some() {
            return LineKind::FootnoteDefinition;
        }
        if LinkDefinitionLine::parse(line).is_some() {
            return LineKind::LinkDefinition;
        }
        if Image::contains(line) {
            return LineKind::Image;
        }
        if Link::find_inline(line).is_some() {
            return LineKind::InlineLink;
        }
        LineKind::Paragraph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn classify(line: &str) -> LineKind<'_> {
        MarkdownLineClassifier.classify(line, None)
    }

    #[rstest]
    #[case("", LineKind::Blank)]
    #[case("   \t", LineKind::Blank)]
    #[case("---", LineKind::HorizontalRule)]
    #[case("* * *", LineKind::ListItem(ListMarker { indent: 0, ordered: false, text: "* *" }))]
    #[case("| a | b |", LineKind::TableRow)]
    #[case("|:--|--:|", LineKind::TableSeparator)]
    #[case("[^1]: note", LineKind::FootnoteDefinition)]
    #[case("[id]: https://x.org", LineKind::LinkDefinition)]
    #[case("see ![i](a.png)", LineKind::Image)]
    #[case("see [l](a) and ![i](a.png)", LineKind::Image)]
    #[case("see [l](a)", LineKind::InlineLink)]
    #[case("[![b](i.svg)](url)", LineKind::InlineLink)]
    #[case("Write `![alt](pic.png)` to embed.", LineKind::Paragraph)]
    #[case(r"\![alt](pic.png)", LineKind::InlineLink)]
    #[case("just text", LineKind::Paragraph)]
    #[case("#hashtag", LineKind::Paragraph)]
    #[case("a | b", LineKind::Paragraph)]
    fn single_line_kinds(#[case] line: &str, #[case] expected: LineKind<'_>) {
        assert_eq!(classify(line), expected);
    }

    #[test]
    fn fence_opens_with_info() {
        assert_eq!(
            classify("```rust"),
            LineKind::CodeFenceStart {
                kind: FenceKind::Backticks,
                info: "rust"
            }
        );
        assert_eq!(
            classify("  ~~~"),
            LineKind::CodeFenceStart {
                kind: FenceKind::Tildes,
                info: ""
            }
        );
    }

    #[rstest]
    #[case("# Heading")]
    #[case("- item")]
    #[case("| a |")]
    #[case("")]
    #[case("~~~")]
    fn inside_fence_everything_is_content(#[case] line: &str) {
        assert_eq!(
            MarkdownLineClassifier.classify(line, Some(FenceKind::Backticks)),
            LineKind::CodeBlockContent
        );
    }

    #[test]
    fn matching_fence_closes() {
        assert_eq!(
            MarkdownLineClassifier.classify("```", Some(FenceKind::Backticks)),
            LineKind::CodeFenceEnd
        );
        assert_eq!(
            MarkdownLineClassifier.classify("~~~~", Some(FenceKind::Tildes)),
            LineKind::CodeFenceEnd
        );
    }

    #[test]
    fn heading_captures_level_and_text() {
        assert_eq!(
            classify("### Third ###"),
            LineKind::Heading {
                level: 3,
                text: "Third"
            }
        );
    }

    #[test]
    fn heading_beats_list_and_quote() {
        assert!(matches!(classify("# - x"), LineKind::Heading { level: 1, .. }));
    }

    #[test]
    fn list_item_captures_indent_and_order() {
        assert_eq!(
            classify("    12. twelve"),
            LineKind::ListItem(ListMarker {
                indent: 4,
                ordered: true,
                text: "twelve"
            })
        );
    }

    #[test]
    fn list_beats_blockquote() {
        assert!(matches!(classify("- > quoted"), LineKind::ListItem(_)));
    }

    #[test]
    fn blockquote_is_de_marked() {
        assert_eq!(
            classify("  > quoted **text**"),
            LineKind::Blockquote {
                text: "quoted **text**"
            }
        );
    }

    #[test]
    fn blockquote_beats_table() {
        assert!(matches!(classify("> | a |"), LineKind::Blockquote { .. }));
    }

    #[test]
    fn rule_beats_paragraph_but_not_list() {
        assert_eq!(classify("***"), LineKind::HorizontalRule);
        assert_eq!(classify("___"), LineKind::HorizontalRule);
        assert!(matches!(classify("- - -"), LineKind::ListItem(_)));
    }
}
