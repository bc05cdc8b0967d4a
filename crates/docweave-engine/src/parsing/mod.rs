//! # Parsing
//!
//! Converts lightweight markup into a flat sequence of [`BlockOp`]s.
//!
//! A conversion is two passes over the split lines:
//!
//! 1. [`ReferenceCollector`] harvests footnote and link definitions into
//!    [`ReferenceTables`].
//! 2. [`BlockBuilder`] classifies each line, buffers multi-line constructs and
//!    formats inline text against those tables.
//!
//! Nothing here fails: malformed syntax degrades to the nearest plainer
//! reading and open constructs are closed at end of input.

pub mod blocks;
pub mod inline;
pub mod lines;
pub mod references;
pub mod snapshot;

#[cfg(test)]
mod tests;

use serde::Serialize;

use blocks::BlockBuilder;
use lines::split_lines;
use references::ReferenceCollector;

pub use blocks::{Alignment, BlockOp, TableBlock};
pub use inline::{Link, Style, StyledRun};
pub use references::{LinkDefinition, ReferenceTables};

/// Parser switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Harvest `[^id]:` and `[id]:` definitions inside fenced code too.
    pub harvest_definitions_in_code: bool,
    /// Parse emphasis inside link text.
    pub nested_link_emphasis: bool,
}

/// Result of a conversion: the ops plus the definitions they refer to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedDoc {
    pub ops: Vec<BlockOp>,
    pub references: ReferenceTables,
}

impl ParsedDoc {
    /// Definition text of a footnote cited by a `FootnoteRef` op.
    pub fn footnote_text(&self, identifier: &str) -> Option<&str> {
        self.references.footnote(identifier)
    }
}

pub fn parse_document(text: &str) -> ParsedDoc {
    parse_document_with(text, &ParseOptions::default())
}

pub fn parse_document_with(text: &str, options: &ParseOptions) -> ParsedDoc {
    let lines = split_lines(text);

    let references = ReferenceCollector::new()
        .harvest_in_code(options.harvest_definitions_in_code)
        .collect(lines.iter().copied());

    let mut builder =
        BlockBuilder::new(&references).nested_link_emphasis(options.nested_link_emphasis);
    for (i, line) in lines.iter().enumerate() {
        builder.push(line, lines.get(i + 1).copied());
    }
    let ops = builder.finish();

    log::debug!("parsed {} lines into {} ops", lines.len(), ops.len());
    ParsedDoc { ops, references }
}
