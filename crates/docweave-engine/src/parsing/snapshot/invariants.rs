use crate::parsing::{
    ParsedDoc,
    blocks::{BlockOp, kinds::Heading},
};

/// Asserts structural invariants of a parse result.
///
/// Panics with a description of the first violation.
pub fn check(doc: &ParsedDoc) {
    let mut prev_list_level: Option<usize> = None;

    for (i, op) in doc.ops.iter().enumerate() {
        match op {
            BlockOp::Heading { level, .. } => {
                assert!(
                    (1..=Heading::MAX_LEVEL).contains(level),
                    "op {i}: heading level {level} out of range"
                );
            }
            BlockOp::Table(t) => {
                assert_eq!(
                    t.alignments.len(),
                    t.header.len(),
                    "op {i}: alignments do not match header width"
                );
                for (r, row) in t.rows.iter().enumerate() {
                    assert_eq!(
                        row.len(),
                        t.header.len(),
                        "op {i}: row {r} does not match header width"
                    );
                }
            }
            BlockOp::ListItem { level, .. } => {
                let max = prev_list_level.map_or(0, |p| p + 1);
                assert!(
                    *level <= max,
                    "op {i}: list level {level} jumps past {max}"
                );
            }
            BlockOp::FootnoteRef { identifier } => {
                assert!(
                    doc.references.footnote(identifier).is_some(),
                    "op {i}: footnote {identifier:?} has no definition"
                );
            }
            _ => {}
        }

        if let Some(runs) = op.runs() {
            assert!(!runs.is_empty(), "op {i}: block without runs");
            assert!(
                runs.iter().all(|r| !r.text.is_empty()),
                "op {i}: empty run"
            );
            assert!(
                runs.windows(2).all(|w| !w[0].same_format(&w[1])),
                "op {i}: adjacent runs share a format"
            );
        }

        prev_list_level = match op {
            BlockOp::ListItem { level, .. } => Some(*level),
            BlockOp::FootnoteRef { .. } => prev_list_level,
            _ => None,
        };
    }
}
