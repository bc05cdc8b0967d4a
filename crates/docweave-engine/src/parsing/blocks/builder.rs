use crate::parsing::{
    inline::{InlineContext, StyledRun, parse_inline_with},
    lines::is_blank,
    references::{ReferenceTables, extract_footnote_refs},
};

use super::{
    classify::{LineKind, MarkdownLineClassifier},
    containers::ListStack,
    kinds::{FenceKind, Image, LineSegment, Table},
    types::BlockOp,
};

/// Construct currently being buffered. At most one is open at a time.
#[derive(Debug, Clone, Default)]
enum ParserState {
    #[default]
    Idle,
    Code {
        kind: FenceKind,
        info: String,
        lines: Vec<String>,
    },
    Table {
        rows: Vec<String>,
    },
    /// De-marked quote lines.
    Quote {
        lines: Vec<String>,
    },
}

/// Line-driven state machine that turns classified lines into [`BlockOp`]s.
///
/// Feed every line with [`push`](Self::push), giving the following line as
/// look-ahead, then call [`finish`](Self::finish) to flush whatever is still
/// open.
pub struct BlockBuilder<'r> {
    classifier: MarkdownLineClassifier,
    refs: &'r ReferenceTables,
    inline: InlineContext<'r>,
    state: ParserState,
    lists: ListStack,
    out: Vec<BlockOp>,
}

impl<'r> BlockBuilder<'r> {
    pub fn new(refs: &'r ReferenceTables) -> Self {
        Self {
            classifier: MarkdownLineClassifier,
            refs,
            inline: InlineContext {
                references: Some(refs),
                nested_link_emphasis: false,
            },
            state: ParserState::Idle,
            lists: ListStack::default(),
            out: vec![],
        }
    }

    /// Parse emphasis inside link text.
    pub fn nested_link_emphasis(mut self, enabled: bool) -> Self {
        self.inline.nested_link_emphasis = enabled;
        self
    }

    /// Consumes one line. `next` is the line after it, used to decide
    /// whether a table continues.
    pub fn push(&mut self, line: &str, next: Option<&str>) {
        let kind = self.classifier.classify(line, self.open_fence());
        log::trace!("{kind:?}: {line:?}");

        match &mut self.state {
            ParserState::Code { lines, .. } => {
                if kind == LineKind::CodeFenceEnd {
                    self.close_code();
                } else {
                    lines.push(line.to_string());
                }
                return;
            }
            ParserState::Quote { lines } => {
                if let LineKind::Blockquote { text } = kind {
                    lines.push(text.to_string());
                    return;
                }
                self.close_quote();
                // The terminating line is reprocessed; a blank one is consumed.
                if kind == LineKind::Blank {
                    return;
                }
            }
            ParserState::Table { .. } => {
                if !matches!(kind, LineKind::TableRow | LineKind::TableSeparator) {
                    self.close_table();
                }
            }
            ParserState::Idle => {}
        }

        self.dispatch(kind, line, next);
    }

    /// Flushes any open construct and returns the ops in document order.
    pub fn finish(mut self) -> Vec<BlockOp> {
        // EOF flush
        match self.state {
            ParserState::Code { .. } => {
                log::debug!("code fence left open at end of input");
                self.close_code();
            }
            ParserState::Table { .. } => self.close_table(),
            ParserState::Quote { .. } => self.close_quote(),
            ParserState::Idle => {}
        }
        self.out
    }

    fn open_fence(&self) -> Option<FenceKind> {
        match self.state {
            ParserState::Code { kind, .. } => Some(kind),
            _ => None,
        }
    }

    fn dispatch(&mut self, kind: LineKind<'_>, line: &str, next: Option<&str>) {
        if !matches!(kind, LineKind::Blank | LineKind::ListItem(_)) {
            self.lists.reset();
        }

        match kind {
            LineKind::Blank => {}
            LineKind::CodeFenceStart { kind, info } => {
                log::debug!("code fence opened ({kind:?})");
                self.state = ParserState::Code {
                    kind,
                    info: info.to_string(),
                    lines: vec![],
                };
            }
            // Only produced while a fence is open, which `push` handles.
            LineKind::CodeFenceEnd | LineKind::CodeBlockContent => {}
            LineKind::Heading { level, text } => {
                self.emit_inline(text, |runs| BlockOp::Heading { level, runs });
            }
            LineKind::ListItem(marker) => {
                let level = self.lists.place(marker.indent, marker.ordered);
                self.emit_inline(marker.text, |runs| BlockOp::ListItem {
                    level,
                    ordered: marker.ordered,
                    runs,
                });
            }
            LineKind::Blockquote { text } => {
                log::debug!("blockquote opened");
                self.state = ParserState::Quote {
                    lines: vec![text.to_string()],
                };
            }
            LineKind::HorizontalRule => self.out.push(BlockOp::HorizontalRule),
            LineKind::TableRow | LineKind::TableSeparator => {
                match &mut self.state {
                    ParserState::Table { rows } => rows.push(line.to_string()),
                    _ => {
                        log::debug!("table opened");
                        self.state = ParserState::Table {
                            rows: vec![line.to_string()],
                        };
                    }
                }
                let continues = next.is_some_and(|n| {
                    matches!(
                        self.classifier.classify(n, None),
                        LineKind::TableRow | LineKind::TableSeparator
                    )
                });
                if !continues {
                    self.close_table();
                }
            }
            // Definitions were harvested before the block pass.
            LineKind::FootnoteDefinition | LineKind::LinkDefinition => {}
            LineKind::Image => {
                for segment in Image::segments(line) {
                    match segment {
                        LineSegment::Text(text) if !is_blank(text) => {
                            self.emit_inline(text, |runs| BlockOp::Paragraph { runs });
                        }
                        LineSegment::Text(_) => {}
                        LineSegment::Image { alt, url } => self.out.push(BlockOp::Image {
                            url: url.to_string(),
                            alt: alt.to_string(),
                        }),
                    }
                }
            }
            LineKind::InlineLink | LineKind::Paragraph => {
                self.emit_inline(line, |runs| BlockOp::Paragraph { runs });
            }
        }
    }

    /// Formats `text` into a block built by `make`, followed by one
    /// `FootnoteRef` per defined `[^id]` it cited.
    ///
    /// The block is dropped when nothing visible is left after the footnote
    /// markers are removed; its refs are still emitted.
    fn emit_inline(&mut self, text: &str, make: impl FnOnce(Vec<StyledRun>) -> BlockOp) {
        let (visible, ids) = extract_footnote_refs(text, self.refs);
        let runs = parse_inline_with(visible.trim(), &self.inline);
        if !runs.is_empty() {
            self.out.push(make(runs));
        }
        self.out
            .extend(ids.into_iter().map(|identifier| BlockOp::FootnoteRef { identifier }));
    }

    fn close_code(&mut self) {
        let ParserState::Code { info, lines, .. } = std::mem::take(&mut self.state) else {
            return;
        };
        log::debug!("code block closed ({} lines)", lines.len());
        self.out.push(BlockOp::CodeBlock {
            text: code_text(&lines),
            language: info.split_whitespace().next().map(str::to_string),
        });
    }

    fn close_table(&mut self) {
        let ParserState::Table { rows } = std::mem::take(&mut self.state) else {
            return;
        };
        match Table::assemble(&rows) {
            Some(mut table) => {
                log::debug!("table closed ({} body rows)", table.rows.len());
                let mut ids = Vec::new();
                for cell in table.header.iter_mut().chain(table.rows.iter_mut().flatten()) {
                    let (visible, cited) = extract_footnote_refs(cell, self.refs);
                    *cell = visible.trim().to_string();
                    ids.extend(cited);
                }
                self.out.push(BlockOp::Table(table));
                self.out
                    .extend(ids.into_iter().map(|identifier| BlockOp::FootnoteRef { identifier }));
            }
            None => {
                // A lone row is just text.
                for row in &rows {
                    self.emit_inline(row, |runs| BlockOp::Paragraph { runs });
                }
            }
        }
    }

    fn close_quote(&mut self) {
        let ParserState::Quote { lines } = std::mem::take(&mut self.state) else {
            return;
        };
        log::debug!("blockquote closed ({} lines)", lines.len());
        self.emit_inline(&lines.join("\n"), |runs| BlockOp::Blockquote { runs });
    }
}

/// Joins code lines, dropping whitespace-only lines at either end. Interior
/// lines keep their indentation.
fn code_text(lines: &[String]) -> String {
    let start = lines.iter().position(|l| !is_blank(l)).unwrap_or(lines.len());
    let end = lines.iter().rposition(|l| !is_blank(l)).map_or(start, |i| i + 1);
    lines[start..end].join("\n")
}
