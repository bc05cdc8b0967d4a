use crate::parsing::{
    ParsedDoc,
    blocks::{Alignment, BlockOp},
    inline::StyledRun,
};

/// Renders a parse result as one line per op, for snapshot tests and the
/// `outline` output format.
///
/// Runs print as `"text"` when plain and `bold+italic:"text"` when styled;
/// a link appends `->url`.
pub fn outline(doc: &ParsedDoc) -> String {
    doc.ops.iter().map(op_line).collect::<Vec<_>>().join("\n")
}

pub fn op_line(op: &BlockOp) -> String {
    match op {
        BlockOp::Heading { level, runs } => format!("heading {level} {}", runs_line(runs)),
        BlockOp::Paragraph { runs } => format!("paragraph {}", runs_line(runs)),
        BlockOp::ListItem {
            level,
            ordered,
            runs,
        } => {
            let marker = if *ordered { "ordered" } else { "bullet" };
            format!("list_item {level} {marker} {}", runs_line(runs))
        }
        BlockOp::Table(t) => format!(
            "table [{}] {:?} {:?}",
            alignments_line(&t.alignments),
            t.header,
            t.rows
        ),
        BlockOp::Blockquote { runs } => format!("blockquote {}", runs_line(runs)),
        BlockOp::CodeBlock { text, language } => {
            format!("code_block {} {text:?}", language.as_deref().unwrap_or("-"))
        }
        BlockOp::HorizontalRule => "horizontal_rule".to_string(),
        BlockOp::Image { url, alt } => format!("image {url:?} alt={alt:?}"),
        BlockOp::FootnoteRef { identifier } => format!("footnote_ref {identifier:?}"),
    }
}

fn runs_line(runs: &[StyledRun]) -> String {
    runs.iter().map(run_text).collect::<Vec<_>>().join(" ")
}

fn run_text(run: &StyledRun) -> String {
    let mut s = if run.style.is_plain() {
        format!("{:?}", run.text)
    } else {
        format!("{}:{:?}", run.style.label(), run.text)
    };
    if let Some(link) = &run.link {
        s.push_str("->");
        s.push_str(&link.url);
    }
    s
}

fn alignments_line(alignments: &[Alignment]) -> String {
    alignments
        .iter()
        .map(|a| a.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
