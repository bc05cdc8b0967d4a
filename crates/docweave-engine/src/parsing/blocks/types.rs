use serde::Serialize;

use crate::parsing::inline::StyledRun;

/// Horizontal alignment of a table column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// A pipe table after width normalization.
///
/// `alignments.len() == header.len()` and every body row has the header's
/// width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableBlock {
    pub header: Vec<String>,
    pub alignments: Vec<Alignment>,
    pub rows: Vec<Vec<String>>,
}

/// One structural instruction of the converted document.
///
/// The sequence of ops is renderable without re-parsing the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum BlockOp {
    Heading {
        /// 1 through 6.
        level: u8,
        runs: Vec<StyledRun>,
    },
    Paragraph {
        runs: Vec<StyledRun>,
    },
    /// A list item with its zero-based nesting level.
    ListItem {
        level: usize,
        ordered: bool,
        runs: Vec<StyledRun>,
    },
    Table(TableBlock),
    Blockquote {
        runs: Vec<StyledRun>,
    },
    CodeBlock {
        text: String,
        /// Info string of the opening fence.
        language: Option<String>,
    },
    HorizontalRule,
    Image {
        url: String,
        alt: String,
    },
    /// A reference to a defined footnote, following the block that cited it.
    FootnoteRef {
        identifier: String,
    },
}

impl BlockOp {
    /// Inline runs of the op, for the variants that carry them.
    pub fn runs(&self) -> Option<&[StyledRun]> {
        match self {
            BlockOp::Heading { runs, .. }
            | BlockOp::Paragraph { runs }
            | BlockOp::ListItem { runs, .. }
            | BlockOp::Blockquote { runs } => Some(runs),
            _ => None,
        }
    }
}
