use crate::parsing::blocks::kinds::{CodeFence, FenceKind};

use super::{
    LinkDefinition, ReferenceTables,
    definitions::{FootnoteDefinition, LinkDefinitionLine},
};

/// Pre-pass that harvests footnote and link definitions from every line.
#[derive(Debug, Clone, Default)]
pub struct ReferenceCollector {
    harvest_in_code: bool,
}

impl ReferenceCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also harvest definitions that sit inside fenced code blocks.
    ///
    /// Off by default: a `[^x]: …` line inside a code sample is code.
    pub fn harvest_in_code(mut self, harvest: bool) -> Self {
        self.harvest_in_code = harvest;
        self
    }

    /// Scans every line once. The footnote pattern is tried before the link
    /// pattern; lines matching neither are ignored.
    pub fn collect<'a, I>(&self, lines: I) -> ReferenceTables
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut tables = ReferenceTables::default();
        let mut fence: Option<FenceKind> = None;

        for line in lines {
            if !self.harvest_in_code {
                let sig = CodeFence::sig(line);
                if let Some(kind) = fence {
                    if CodeFence::closes(kind, sig) {
                        fence = None;
                    }
                    continue;
                }
                if let Some(sig) = sig {
                    fence = Some(sig.kind);
                    continue;
                }
            }

            if let Some(def) = FootnoteDefinition::parse(line) {
                tables.insert_footnote(def.id, def.text);
            } else if let Some(def) = LinkDefinitionLine::parse(line) {
                tables.insert_link(
                    def.label,
                    LinkDefinition {
                        url: def.url.to_string(),
                        title: def.title.map(str::to_string),
                    },
                );
            }
        }

        log::debug!(
            "collected {} footnote(s) and {} link definition(s)",
            tables.footnotes().count(),
            tables.links().count()
        );
        tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &[&str] = &[
        "Intro[^n] and [docs][d].",
        "",
        "[^n]: The note.",
        "[d]: https://docs.example \"Docs\"",
        "```",
        "[^code]: inside a fence",
        "[c]: https://code.example",
        "```",
    ];

    #[test]
    fn collects_footnotes_and_links() {
        let t = ReferenceCollector::new().collect(DOC.iter().copied());
        assert_eq!(t.footnote("n"), Some("The note."));
        let d = t.link("D").unwrap();
        assert_eq!(d.url, "https://docs.example");
        assert_eq!(d.title.as_deref(), Some("Docs"));
    }

    #[test]
    fn skips_definitions_inside_code_by_default() {
        let t = ReferenceCollector::new().collect(DOC.iter().copied());
        assert_eq!(t.footnote("code"), None);
        assert!(t.link("c").is_none());
    }

    #[test]
    fn can_harvest_inside_code() {
        let t = ReferenceCollector::new()
            .harvest_in_code(true)
            .collect(DOC.iter().copied());
        assert_eq!(t.footnote("code"), Some("inside a fence"));
        assert!(t.link("c").is_some());
    }

    #[test]
    fn unterminated_fence_hides_the_rest() {
        let lines = ["```", "[^a]: x"];
        let t = ReferenceCollector::new().collect(lines);
        assert!(t.is_empty());
    }

    #[test]
    fn tilde_fence_is_not_closed_by_backticks() {
        let lines = ["~~~", "```", "[^a]: x", "~~~", "[^b]: y"];
        let t = ReferenceCollector::new().collect(lines);
        assert_eq!(t.footnote("a"), None);
        assert_eq!(t.footnote("b"), Some("y"));
    }

    #[test]
    fn malformed_definitions_are_ignored() {
        let lines = ["[^]: empty id", "[x]:", "plain text"];
        let t = ReferenceCollector::new().collect(lines);
        assert!(t.is_empty());
    }
}
