//! # Inline Parsing
//!
//! Cursor-based inline parsing with explicit raw zones.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing. Every inline-bearing block
//! (heading, paragraph, list item, blockquote) hands its text to
//! [`parse_inline_with`], which returns a flat list of [`StyledRun`]s.
//!
//! Emphasis nests: the content between a matched opener and closer is parsed
//! again with the delimiter's effect added to the current style, so
//! `**bold *both***` yields a bold run followed by a bold+italic run.
//!
//! ## Modules
//!
//! - **`types`**: `Style`, `Link`, `StyledRun`
//! - **`kinds`**: delimiter tables (code span, escape, emphasis, link)
//! - **`cursor`**: `Cursor` for byte-position scanning
//! - **`parser`**: `parse_inline()` / `parse_inline_with()` entry points
//!
//! ## Raw Zone Precedence
//!
//! Escapes and code spans are resolved first: `` `*a*` `` is a single code
//! run, not italic text.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{InlineContext, parse_inline, parse_inline_with};
pub use types::{Link, Style, StyledRun, plain_text};
