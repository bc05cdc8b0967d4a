//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a [`LineKind`]
//!    carrying only local facts (heading level, list indent, de-marked quote
//!    text, fence signature). The only outside input is whether a fence is
//!    open.
//!
//! 2. **Block Construction** (`builder`): a [`BlockBuilder`] state machine
//!    buffers multi-line constructs (code, tables, blockquotes) and emits
//!    [`BlockOp`]s as they close.
//!
//! ## Modules
//!
//! - **`types`**: the IR (`BlockOp`, `TableBlock`, `Alignment`)
//! - **`kinds`**: block syntax with owned delimiters (fences, headings, lists,
//!   quotes, rules, tables, images)
//! - **`classify`**: `MarkdownLineClassifier` produces a `LineKind` per line
//! - **`containers`**: `ListStack`, list ancestry for nesting levels
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - At most one construct is buffered at a time
//! - Fenced code is a raw zone: no block or inline parsing inside
//! - Anything still open at end of input is flushed by `finish`

pub mod builder;
pub mod classify;
pub mod containers;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineKind, MarkdownLineClassifier};
pub use containers::ListStack;
pub use types::{Alignment, BlockOp, TableBlock};
