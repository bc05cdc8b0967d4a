//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone that suppresses other parsing
//! - **`Escape`**: `BACKSLASH` - literal ASCII punctuation
//! - **`Emphasis`**: the `DELIMITERS` table for `*`, `_`, `~` and `^` runs
//! - **`Link`**: `[`, `](`, `)` plus the reference form `[text][label]`
//! - **`RawZone`**: escapes and code spans, skipped by every other scanner
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.
//! The parser calls these constants; it never hardcodes `**` or `` ` ``.

pub mod code_span;
pub mod emphasis;
pub mod escape;
pub mod link;
pub mod raw_zone;

pub use code_span::CodeSpan;
pub use emphasis::{DELIMITERS, Delimiter, Effect, Emphasis};
pub use escape::Escape;
pub use link::{InlineLinkMatch, Link, ReferenceLinkMatch};
pub use raw_zone::RawZone;
