//! Whole-document tests for the parsing module.
//!
//! Each test runs the full pipeline (line split, reference collection, block
//! building) and checks the structural invariants before asserting on the
//! result.

use pretty_assertions::assert_eq;

use crate::parsing::{
    ParseOptions, ParsedDoc,
    blocks::{Alignment, BlockOp, TableBlock},
    inline::{StyledRun, plain_text},
    parse_document, parse_document_with, snapshot,
};

fn parse(md: &str) -> ParsedDoc {
    let doc = parse_document(md);
    snapshot::invariants(&doc);
    doc
}

fn text_of(op: &BlockOp) -> String {
    op.runs().map(plain_text).unwrap_or_default()
}

#[test]
fn end_to_end_document() {
    let doc = parse("# Title\n- a\n  - b\n| H1 | H2 |\n|---|---|\n| 1 | 2 |\n");

    assert_eq!(
        doc.ops,
        vec![
            BlockOp::Heading {
                level: 1,
                runs: vec![StyledRun::plain("Title")],
            },
            BlockOp::ListItem {
                level: 0,
                ordered: false,
                runs: vec![StyledRun::plain("a")],
            },
            BlockOp::ListItem {
                level: 1,
                ordered: false,
                runs: vec![StyledRun::plain("b")],
            },
            BlockOp::Table(TableBlock {
                header: vec!["H1".into(), "H2".into()],
                alignments: vec![Alignment::Left, Alignment::Left],
                rows: vec![vec!["1".into(), "2".into()]],
            }),
        ]
    );

    insta::assert_snapshot!(snapshot::outline(&doc), @r#"
    heading 1 "Title"
    list_item 0 bullet "a"
    list_item 1 bullet "b"
    table [left, left] ["H1", "H2"] [["1", "2"]]
    "#);
}

#[test]
fn fenced_code_is_not_formatted() {
    let doc = parse("```\nlet x = **y**; # c | d\n```\n");
    assert_eq!(
        doc.ops,
        vec![BlockOp::CodeBlock {
            text: "let x = **y**; # c | d".into(),
            language: None,
        }]
    );
}

#[test]
fn unclosed_fence_becomes_code_block() {
    let doc = parse("```\ncode\n");
    assert_eq!(
        doc.ops,
        vec![BlockOp::CodeBlock {
            text: "code".into(),
            language: None,
        }]
    );
}

#[test]
fn table_alignments_match_header() {
    let doc = parse("| a | b | c | d |\n|:---:|---:|---|:---|\n| 1 | 2 | 3 | 4 |\n| 5 | 6 | 7 | 8 |\n");
    let BlockOp::Table(t) = &doc.ops[0] else {
        panic!("expected table, got {:?}", doc.ops[0]);
    };
    assert_eq!(
        t.alignments,
        vec![
            Alignment::Center,
            Alignment::Right,
            Alignment::Left,
            Alignment::Left
        ]
    );
    assert_eq!(t.alignments.len(), t.header.len());
    assert_eq!(t.rows.len(), 2);
}

#[test]
fn list_indentation_maps_to_levels() {
    let doc = parse("- a\n  - b\n    - c\n  - d\n- e\n");
    insta::assert_snapshot!(snapshot::outline(&doc), @r#"
    list_item 0 bullet "a"
    list_item 1 bullet "b"
    list_item 2 bullet "c"
    list_item 1 bullet "d"
    list_item 0 bullet "e"
    "#);
}

#[test]
fn footnote_reference_round_trip() {
    let doc = parse("Text[^a] here.\n\n[^a]: note\n");
    assert_eq!(
        doc.ops,
        vec![
            BlockOp::Paragraph {
                runs: vec![StyledRun::plain("Text here.")],
            },
            BlockOp::FootnoteRef {
                identifier: "a".into(),
            },
        ]
    );
    assert_eq!(doc.footnote_text("a"), Some("note"));
}

#[test]
fn footnote_defined_before_use() {
    let doc = parse("[^n]: early\n\nLater[^N].\n");
    assert_eq!(doc.ops.len(), 2);
    assert_eq!(
        doc.ops[1],
        BlockOp::FootnoteRef {
            identifier: "n".into()
        }
    );
}

#[test]
fn marker_only_paragraph_emits_only_refs() {
    let doc = parse("[^a]\n\n[^a]: x\n");
    assert_eq!(
        doc.ops,
        vec![BlockOp::FootnoteRef {
            identifier: "a".into()
        }]
    );
}

#[test]
fn footnotes_in_headings_and_list_items() {
    let doc = parse("# Heading[^h]\n- item[^i]\n\n[^h]: on heading\n[^i]: on item\n");
    insta::assert_snapshot!(snapshot::outline(&doc), @r#"
    heading 1 "Heading"
    footnote_ref "h"
    list_item 0 bullet "item"
    footnote_ref "i"
    "#);
}

#[test]
fn reference_links_resolve() {
    let doc = parse("Read [the guide][Guide] or [guide][].\n\n[guide]: https://g.example 'G'\n");
    let runs = doc.ops[0].runs().unwrap();
    assert_eq!(runs.len(), 5);
    assert_eq!(runs[1].text, "the guide");
    let link = runs[1].link.as_ref().unwrap();
    assert_eq!(link.url, "https://g.example");
    assert_eq!(link.title.as_deref(), Some("G"));
    assert_eq!(runs[3].text, "guide");
}

#[test]
fn undefined_references_stay_literal() {
    let doc = parse("See [x][nope] and[^none].\n");
    assert_eq!(text_of(&doc.ops[0]), "See [x][nope] and[^none].");
    assert_eq!(doc.ops.len(), 1);
}

#[test]
fn definitions_in_code_are_skipped_by_default() {
    let md = "```\n[^a]: x\n```\nSee[^a]\n";

    let doc = parse(md);
    assert_eq!(doc.ops.len(), 2);
    assert_eq!(text_of(&doc.ops[1]), "See[^a]");

    let options = ParseOptions {
        harvest_definitions_in_code: true,
        ..Default::default()
    };
    let doc = parse_document_with(md, &options);
    snapshot::invariants(&doc);
    assert_eq!(text_of(&doc.ops[1]), "See");
    assert_eq!(
        doc.ops[2],
        BlockOp::FootnoteRef {
            identifier: "a".into()
        }
    );
}

#[test]
fn nested_link_emphasis_option() {
    let md = "[**bold** link](https://x.org)";

    let literal = parse(md);
    assert_eq!(literal.ops[0].runs().unwrap().len(), 1);
    assert_eq!(text_of(&literal.ops[0]), "**bold** link");

    let options = ParseOptions {
        nested_link_emphasis: true,
        ..Default::default()
    };
    let nested = parse_document_with(md, &options);
    let runs = nested.ops[0].runs().unwrap();
    assert_eq!(runs.len(), 2);
    assert!(runs[0].style.bold);
    assert!(runs.iter().all(|r| r.link.is_some()));
}

#[test]
fn blockquote_then_paragraph() {
    let doc = parse("> first\n>second\nafter\n");
    insta::assert_snapshot!(snapshot::outline(&doc), @r#"
    blockquote "first\nsecond"
    paragraph "after"
    "#);
}

#[test]
fn images_between_text() {
    let doc = parse("![a](a.png) then ![b](b.png)\n");
    insta::assert_snapshot!(snapshot::outline(&doc), @r#"
    image "a.png" alt="a"
    paragraph "then"
    image "b.png" alt="b"
    "#);
}

#[test]
fn crlf_and_cr_line_endings() {
    let doc = parse("# T\r\n\r\ntext\rmore\r\n");
    assert_eq!(doc.ops.len(), 3);
    assert!(matches!(doc.ops[0], BlockOp::Heading { level: 1, .. }));
    assert_eq!(text_of(&doc.ops[2]), "more");
}

#[test]
fn empty_document() {
    assert!(parse("").ops.is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse("\n\n  \n\t\n").ops.is_empty());
}

#[test]
fn malformed_syntax_degrades_to_text() {
    let doc = parse("#NoSpace\n**open\n|not a row\n[x]:\n");
    assert_eq!(doc.ops.len(), 4);
    assert!(
        doc.ops
            .iter()
            .all(|op| matches!(op, BlockOp::Paragraph { .. }))
    );
    assert_eq!(text_of(&doc.ops[1]), "**open");
}

#[test]
fn table_cell_footnotes_follow_the_table() {
    let doc = parse("| a[^1] | b |\n|---|---|\n| 1 | 2 |\n\n[^1]: note\n");
    assert_eq!(
        doc.ops,
        vec![
            BlockOp::Table(TableBlock {
                header: vec!["a".into(), "b".into()],
                alignments: vec![Alignment::Left, Alignment::Left],
                rows: vec![vec!["1".into(), "2".into()]],
            }),
            BlockOp::FootnoteRef {
                identifier: "1".into(),
            },
        ]
    );
}

#[test]
fn code_spans_and_escapes_hide_block_syntax() {
    let doc = parse("Write `![alt](pic.png)` to embed.\n");
    assert_eq!(doc.ops.len(), 1);
    assert_eq!(text_of(&doc.ops[0]), "Write ![alt](pic.png) to embed.");

    let doc = parse("Write `x[^a]` literally.\n\n[^a]: note\n");
    assert_eq!(doc.ops.len(), 1);
    assert_eq!(text_of(&doc.ops[0]), "Write x[^a] literally.");

    let doc = parse("not an image: \\![alt](pic.png)\n");
    assert_eq!(doc.ops.len(), 1);
    assert!(matches!(doc.ops[0], BlockOp::Paragraph { .. }));
    assert_eq!(text_of(&doc.ops[0]), "not an image: !alt");
}

#[test]
fn linked_badge_stays_one_paragraph() {
    let doc = parse("[![build](ci.svg)](https://ci.example) passing\n");
    assert_eq!(doc.ops.len(), 1);
    assert_eq!(text_of(&doc.ops[0]), "build passing");
}

#[test]
fn long_line_of_openers_parses() {
    let md = "*a ".repeat(100_000);
    let doc = parse(&md);
    assert_eq!(doc.ops.len(), 1);
    assert_eq!(text_of(&doc.ops[0]), md.trim_end());
}
