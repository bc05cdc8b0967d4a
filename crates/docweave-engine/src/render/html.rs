use std::fmt::{self, Write};

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsing::{
    Alignment, ReferenceTables, Style, StyledRun,
    inline::{InlineContext, parse_inline_with},
};

use super::{BuildError, DocumentBuilder, ImageResolver, PassthroughResolver};

#[derive(Debug, Clone, Copy)]
struct OpenList {
    ordered: bool,
    item_open: bool,
}

/// Renders ops as an HTML5 fragment.
///
/// Flat list items are folded back into nested `<ul>`/`<ol>` elements.
/// Footnote citations become numbered `<sup>` links placed inside the block
/// they follow, and the footnote bodies are written in a trailing
/// `<section class="footnotes">` by [`end_document`](DocumentBuilder::end_document).
pub struct HtmlWriter {
    out: String,
    resolver: Box<dyn ImageResolver>,
    /// Closing markup of the last inline block, held back so footnote
    /// markers can still be written into it.
    open_block: Option<String>,
    lists: Vec<OpenList>,
    /// `(identifier, text)` in first-citation order.
    footnotes: Vec<(String, String)>,
    /// Link definitions for cell and footnote text.
    references: ReferenceTables,
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self::with_resolver(PassthroughResolver)
    }

    pub fn with_resolver(resolver: impl ImageResolver + 'static) -> Self {
        Self {
            out: String::new(),
            resolver: Box::new(resolver),
            open_block: None,
            lists: vec![],
            footnotes: vec![],
            references: ReferenceTables::default(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_html(self) -> String {
        self.out
    }

    fn close_block(&mut self) {
        if let Some(close) = self.open_block.take() {
            self.out.push_str(&close);
        }
    }

    /// Ends whatever is open before a non-list block.
    fn start_block(&mut self) {
        self.close_block();
        while !self.lists.is_empty() {
            self.pop_list();
        }
    }

    fn pop_list(&mut self) {
        if let Some(list) = self.lists.pop() {
            if list.item_open {
                self.out.push_str("</li>\n");
            }
            self.out
                .push_str(if list.ordered { "</ol>\n" } else { "</ul>\n" });
        }
    }

    /// Formats raw text with the document's link definitions.
    fn format(&self, text: &str) -> Vec<StyledRun> {
        let ctx = InlineContext {
            references: Some(&self.references),
            ..Default::default()
        };
        parse_inline_with(text, &ctx)
    }

    fn write_cell(&mut self, tag: &str, alignment: Option<Alignment>, text: &str) -> fmt::Result {
        match alignment {
            Some(a @ (Alignment::Center | Alignment::Right)) => {
                write!(self.out, "<{tag} style=\"text-align: {}\">", a.as_str())?
            }
            _ => write!(self.out, "<{tag}>")?,
        }
        let runs = self.format(text);
        write_runs(&mut self.out, &runs)?;
        writeln!(self.out, "</{tag}>")
    }
}

impl DocumentBuilder for HtmlWriter {
    fn set_references(&mut self, references: &ReferenceTables) {
        self.references = references.clone();
    }

    fn end_document(&mut self) -> Result<(), BuildError> {
        self.start_block();
        if self.footnotes.is_empty() {
            return Ok(());
        }

        self.out.push_str("<section class=\"footnotes\">\n<ol>\n");
        for (id, text) in &self.footnotes {
            write!(self.out, "<li id=\"fn-{}\">", encode_double_quoted_attribute(id))?;
            let runs = self.format(text);
            write_runs(&mut self.out, &runs)?;
            self.out.push_str("</li>\n");
        }
        self.out.push_str("</ol>\n</section>\n");
        Ok(())
    }

    fn append_heading(&mut self, level: u8, runs: &[StyledRun]) -> Result<(), BuildError> {
        self.start_block();
        write!(self.out, "<h{level}>")?;
        write_runs(&mut self.out, runs)?;
        self.open_block = Some(format!("</h{level}>\n"));
        Ok(())
    }

    fn append_paragraph(&mut self, runs: &[StyledRun]) -> Result<(), BuildError> {
        self.start_block();
        self.out.push_str("<p>");
        write_runs(&mut self.out, runs)?;
        self.open_block = Some("</p>\n".into());
        Ok(())
    }

    fn append_list_item(
        &mut self,
        level: usize,
        ordered: bool,
        runs: &[StyledRun],
    ) -> Result<(), BuildError> {
        self.close_block();
        let depth = level + 1;

        while self.lists.len() > depth {
            self.pop_list();
        }
        if self.lists.len() == depth {
            if self.lists.last().is_some_and(|l| l.ordered != ordered) {
                // A marker change at the same level starts a new list.
                self.pop_list();
            } else if let Some(top) = self.lists.last_mut()
                && top.item_open
            {
                self.out.push_str("</li>\n");
                top.item_open = false;
            }
        }
        while self.lists.len() < depth {
            self.out.push_str(if ordered { "<ol>\n" } else { "<ul>\n" });
            self.lists.push(OpenList {
                ordered,
                item_open: false,
            });
        }

        self.out.push_str("<li>");
        write_runs(&mut self.out, runs)?;
        if let Some(top) = self.lists.last_mut() {
            top.item_open = true;
        }
        // The item stays open for nested lists; footnote markers go straight in.
        self.open_block = Some(String::new());
        Ok(())
    }

    fn append_table(
        &mut self,
        header: &[String],
        alignments: &[Alignment],
        rows: &[Vec<String>],
    ) -> Result<(), BuildError> {
        self.start_block();
        self.out.push_str("<table>\n<thead>\n<tr>\n");
        for (i, cell) in header.iter().enumerate() {
            self.write_cell("th", alignments.get(i).copied(), cell)?;
        }
        self.out.push_str("</tr>\n</thead>\n");

        if !rows.is_empty() {
            self.out.push_str("<tbody>\n");
            for row in rows {
                self.out.push_str("<tr>\n");
                for (i, cell) in row.iter().enumerate() {
                    self.write_cell("td", alignments.get(i).copied(), cell)?;
                }
                self.out.push_str("</tr>\n");
            }
            self.out.push_str("</tbody>\n");
        }
        self.out.push_str("</table>\n");
        Ok(())
    }

    fn append_blockquote(&mut self, runs: &[StyledRun]) -> Result<(), BuildError> {
        self.start_block();
        self.out.push_str("<blockquote>\n<p>");
        write_runs(&mut self.out, runs)?;
        self.open_block = Some("</p>\n</blockquote>\n".into());
        Ok(())
    }

    fn append_code_block(&mut self, text: &str, language: Option<&str>) -> Result<(), BuildError> {
        self.start_block();
        match language {
            Some(lang) => write!(
                self.out,
                "<pre><code class=\"language-{}\">",
                encode_double_quoted_attribute(lang)
            )?,
            None => self.out.push_str("<pre><code>"),
        }
        self.out.push_str(&encode_text(text));
        if !text.is_empty() {
            self.out.push('\n');
        }
        self.out.push_str("</code></pre>\n");
        Ok(())
    }

    fn append_horizontal_rule(&mut self) -> Result<(), BuildError> {
        self.start_block();
        self.out.push_str("<hr />\n");
        Ok(())
    }

    fn append_image(&mut self, url: &str, alt: &str) -> Result<(), BuildError> {
        let src = self
            .resolver
            .resolve(url)
            .map_err(|source| BuildError::Fetch {
                url: url.to_string(),
                source,
            })?;

        self.start_block();
        writeln!(
            self.out,
            "<p><img src=\"{}\" alt=\"{}\" /></p>",
            encode_double_quoted_attribute(&src),
            encode_double_quoted_attribute(alt)
        )?;
        Ok(())
    }

    fn append_footnote(&mut self, identifier: &str, text: &str) -> Result<(), BuildError> {
        let number = match self.footnotes.iter().position(|(id, _)| id == identifier) {
            Some(i) => i + 1,
            None => {
                self.footnotes
                    .push((identifier.to_string(), text.to_string()));
                self.footnotes.len()
            }
        };

        let standalone = self.open_block.is_none();
        if standalone {
            self.start_block();
            self.out.push_str("<p>");
        }
        write!(
            self.out,
            "<sup class=\"footnote-ref\"><a href=\"#fn-{}\">{number}</a></sup>",
            encode_double_quoted_attribute(identifier)
        )?;
        if standalone {
            self.open_block = Some("</p>\n".into());
        }
        Ok(())
    }
}

/// HTML element names for the flags of `style`, outermost first.
fn style_tags(style: &Style) -> Vec<&'static str> {
    [
        (style.bold, "strong"),
        (style.italic, "em"),
        (style.strikethrough, "del"),
        (style.superscript, "sup"),
        (style.subscript, "sub"),
        (style.code, "code"),
    ]
    .into_iter()
    .filter(|(on, _)| *on)
    .map(|(_, tag)| tag)
    .collect()
}

fn write_runs(out: &mut String, runs: &[StyledRun]) -> fmt::Result {
    for run in runs {
        if let Some(link) = &run.link {
            write!(out, "<a href=\"{}\"", encode_double_quoted_attribute(&link.url))?;
            if let Some(title) = &link.title {
                write!(out, " title=\"{}\"", encode_double_quoted_attribute(title))?;
            }
            out.push('>');
        }

        let tags = style_tags(&run.style);
        for tag in &tags {
            write!(out, "<{tag}>")?;
        }
        out.push_str(&encode_text(&run.text));
        for tag in tags.iter().rev() {
            write!(out, "</{tag}>")?;
        }

        if run.link.is_some() {
            out.push_str("</a>");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        parsing::parse_document,
        render::{LocalImageResolver, apply},
    };
    use pretty_assertions::assert_eq;

    fn render(md: &str) -> String {
        let doc = parse_document(md);
        let mut writer = HtmlWriter::new();
        apply(&doc, &mut writer).unwrap();
        writer.into_html()
    }

    #[test]
    fn heading_and_inline_styles() {
        assert_eq!(
            render("# Hi *there*\n\nA **b** [l](u \"t\") & <x>\n"),
            "<h1>Hi <em>there</em></h1>\n\
             <p>A <strong>b</strong> <a href=\"u\" title=\"t\">l</a> &amp; &lt;x&gt;</p>\n"
        );
    }

    #[test]
    fn flat_items_fold_into_nested_lists() {
        assert_eq!(
            render("- a\n  - b\n  - c\n- d\n1. e\n"),
            "<ul>\n<li>a<ul>\n<li>b</li>\n<li>c</li>\n</ul>\n</li>\n<li>d</li>\n</ul>\n\
             <ol>\n<li>e</li>\n</ol>\n"
        );
    }

    #[test]
    fn list_closes_before_next_block() {
        assert_eq!(
            render("1. one\n\nafter\n"),
            "<ol>\n<li>one</li>\n</ol>\n<p>after</p>\n"
        );
    }

    #[test]
    fn table_with_alignment() {
        assert_eq!(
            render("| a | b |\n|:-:|--:|\n| 1 | **2** |\n"),
            "<table>\n<thead>\n<tr>\n\
             <th style=\"text-align: center\">a</th>\n\
             <th style=\"text-align: right\">b</th>\n\
             </tr>\n</thead>\n<tbody>\n<tr>\n\
             <td style=\"text-align: center\">1</td>\n\
             <td style=\"text-align: right\"><strong>2</strong></td>\n\
             </tr>\n</tbody>\n</table>\n"
        );
    }

    #[test]
    fn code_block_is_escaped() {
        assert_eq!(
            render("```rust\nlet a = 1 < 2;\n```\n"),
            "<pre><code class=\"language-rust\">let a = 1 &lt; 2;\n</code></pre>\n"
        );
    }

    #[test]
    fn footnotes_are_numbered_and_collected() {
        let html = render("One[^a] two[^b].\n\n> Quote[^a]\n\n[^a]: First *note*.\n[^b]: Second.\n");
        assert_eq!(
            html,
            "<p>One two.\
             <sup class=\"footnote-ref\"><a href=\"#fn-a\">1</a></sup>\
             <sup class=\"footnote-ref\"><a href=\"#fn-b\">2</a></sup></p>\n\
             <blockquote>\n<p>Quote<sup class=\"footnote-ref\"><a href=\"#fn-a\">1</a></sup></p>\n</blockquote>\n\
             <section class=\"footnotes\">\n<ol>\n\
             <li id=\"fn-a\">First <em>note</em>.</li>\n\
             <li id=\"fn-b\">Second.</li>\n\
             </ol>\n</section>\n"
        );
    }

    #[test]
    fn footnote_without_open_block_gets_its_own_paragraph() {
        let mut writer = HtmlWriter::new();
        writer.append_footnote("x", "t").unwrap();
        writer.end_document().unwrap();
        assert!(
            writer
                .as_str()
                .starts_with("<p><sup class=\"footnote-ref\"><a href=\"#fn-x\">1</a></sup></p>\n")
        );
    }

    #[test]
    fn image_attributes_are_escaped() {
        assert_eq!(
            render("![x \"y\"](a.png)\n\n---\n"),
            "<p><img src=\"a.png\" alt=\"x &quot;y&quot;\" /></p>\n<hr />\n"
        );
    }

    #[test]
    fn missing_image_is_skipped_and_rest_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let doc = parse_document("before\n\n![gone](gone.png)\n\nafter\n");
        let mut writer =
            HtmlWriter::with_resolver(LocalImageResolver::new(Some(dir.path().to_path_buf())));

        let report = apply(&doc, &mut writer).unwrap();

        assert_eq!(report.skipped_images.len(), 1);
        assert_eq!(report.skipped_images[0].url, "gone.png");
        assert_eq!(writer.as_str(), "<p>before</p>\n<p>after</p>\n");
    }

    #[test]
    fn table_cells_use_document_definitions() {
        assert_eq!(
            render("| a[^1] | [x][id] |\n|---|---|\n| 1 | 2 |\n\n[^1]: note\n[id]: https://x.org\n"),
            "<table>\n<thead>\n<tr>\n\
             <th>a</th>\n\
             <th><a href=\"https://x.org\">x</a></th>\n\
             </tr>\n</thead>\n<tbody>\n<tr>\n\
             <td>1</td>\n\
             <td>2</td>\n\
             </tr>\n</tbody>\n</table>\n\
             <p><sup class=\"footnote-ref\"><a href=\"#fn-1\">1</a></sup></p>\n\
             <section class=\"footnotes\">\n<ol>\n\
             <li id=\"fn-1\">note</li>\n\
             </ol>\n</section>\n"
        );
    }
}
