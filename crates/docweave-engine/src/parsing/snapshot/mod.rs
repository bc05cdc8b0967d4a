//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`outline`**: Renders ops as stable one-line summaries for `insta`
//!   snapshots (also the CLI's `outline` format)
//! - **`invariants`**: Structural checks every parse result must pass
//!   (heading levels, table widths, list level steps, non-empty runs)
//!
//! ## Testing Strategy
//!
//! Parsing behavior is pinned by fixture snapshots rather than a separate
//! formal grammar.

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::{op_line, outline};
