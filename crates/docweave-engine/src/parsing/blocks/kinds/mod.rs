//! # Block Kinds
//!
//! Each block construct owns its delimiter constants and its line-level
//! recognizer. The classifier calls these; it never hardcodes `#`, `>` or
//! `|` itself.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod image;
pub mod list_marker;
pub mod table;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use heading::Heading;
pub use image::{Image, LineSegment};
pub use list_marker::ListMarker;
pub use table::Table;
pub use thematic_break::ThematicBreak;
