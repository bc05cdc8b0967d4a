//! # Reference Tables
//!
//! Footnote and link definitions are collected in a pre-pass over every line
//! (`collector`) before any block is built. The resulting
//! [`ReferenceTables`] are read-only for the rest of the conversion and are
//! threaded explicitly through the block and inline parsers.
//!
//! ## Modules
//!
//! - **`definitions`**: line patterns for `[^id]: text` and `[id]: url "title"`
//! - **`collector`**: `ReferenceCollector`, the pre-pass
//! - **`footnotes`**: removal of `[^id]` markers from visible text

pub mod collector;
pub mod definitions;
pub mod footnotes;

use std::collections::BTreeMap;

use serde::Serialize;

pub use collector::ReferenceCollector;
pub use footnotes::extract_footnote_refs;

/// Target of a reference-style link definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkDefinition {
    pub url: String,
    pub title: Option<String>,
}

/// Footnote and link definitions keyed by normalized label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReferenceTables {
    footnotes: BTreeMap<String, String>,
    links: BTreeMap<String, LinkDefinition>,
}

impl ReferenceTables {
    /// Looks up a footnote body. The identifier is normalized first.
    pub fn footnote(&self, id: &str) -> Option<&str> {
        self.footnotes.get(&normalize_label(id)).map(String::as_str)
    }

    /// Looks up a link definition. The label is normalized first.
    pub fn link(&self, label: &str) -> Option<&LinkDefinition> {
        self.links.get(&normalize_label(label))
    }

    pub fn footnotes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.footnotes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn links(&self) -> impl Iterator<Item = (&str, &LinkDefinition)> {
        self.links.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.footnotes.is_empty() && self.links.is_empty()
    }

    // Later definitions replace earlier ones.
    pub(crate) fn insert_footnote(&mut self, id: &str, text: &str) {
        self.footnotes
            .insert(normalize_label(id), text.trim().to_string());
    }

    pub(crate) fn insert_link(&mut self, label: &str, def: LinkDefinition) {
        self.links.insert(normalize_label(label), def);
    }
}

/// Canonical form of a label: trimmed, inner whitespace collapsed, lowercased.
pub fn normalize_label(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_and_lowercases() {
        assert_eq!(normalize_label("  Foo \t Bar "), "foo bar");
    }

    #[test]
    fn lookups_are_label_insensitive() {
        let mut t = ReferenceTables::default();
        t.insert_link(
            "Rust Docs",
            LinkDefinition {
                url: "https://doc.rust-lang.org".into(),
                title: None,
            },
        );
        t.insert_footnote("Note", " body ");
        assert!(t.link("rust  docs").is_some());
        assert_eq!(t.footnote("NOTE"), Some("body"));
        assert!(!t.is_empty());
    }

    #[test]
    fn last_definition_wins() {
        let mut t = ReferenceTables::default();
        t.insert_footnote("a", "first");
        t.insert_footnote("a", "second");
        assert_eq!(t.footnote("a"), Some("second"));
        assert_eq!(t.footnotes().count(), 1);
    }
}
