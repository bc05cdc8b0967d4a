//! # Rendering
//!
//! Drives a [`DocumentBuilder`] over the ops of a [`ParsedDoc`].
//!
//! Parsing never touches an output format; [`apply`] is a separate pass that
//! replays the IR against whatever builder the caller supplies. The bundled
//! [`HtmlWriter`] renders HTML fragments.
//!
//! ## Failure model
//!
//! Only image resolution can fail for a single op. [`apply`] logs the failure,
//! records it in the [`ApplyReport`] and carries on. Write failures abort.

pub mod html;
pub mod image;

use std::{fmt, path::PathBuf};

use thiserror::Error;

use crate::parsing::{Alignment, BlockOp, ParsedDoc, ReferenceTables, StyledRun};

pub use html::HtmlWriter;
pub use image::{ImageResolver, LocalImageResolver, PassthroughResolver};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("image not found at {}", .0.display())]
    NotFound(PathBuf),
    #[error("unsupported image source: {0}")]
    Unsupported(String),
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("could not fetch image {url}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },
    #[error("failed to write document")]
    Write(#[from] fmt::Error),
}

/// Output-format adapter fed one call per op.
pub trait DocumentBuilder {
    /// Receives the document's definitions before any op, for builders that
    /// format raw text such as table cells themselves.
    fn set_references(&mut self, _references: &ReferenceTables) {}

    fn begin_document(&mut self) -> Result<(), BuildError> {
        Ok(())
    }

    fn end_document(&mut self) -> Result<(), BuildError> {
        Ok(())
    }

    fn append_heading(&mut self, level: u8, runs: &[StyledRun]) -> Result<(), BuildError>;

    fn append_paragraph(&mut self, runs: &[StyledRun]) -> Result<(), BuildError>;

    fn append_list_item(
        &mut self,
        level: usize,
        ordered: bool,
        runs: &[StyledRun],
    ) -> Result<(), BuildError>;

    fn append_table(
        &mut self,
        header: &[String],
        alignments: &[Alignment],
        rows: &[Vec<String>],
    ) -> Result<(), BuildError>;

    fn append_blockquote(&mut self, runs: &[StyledRun]) -> Result<(), BuildError>;

    fn append_code_block(&mut self, text: &str, language: Option<&str>) -> Result<(), BuildError>;

    fn append_horizontal_rule(&mut self) -> Result<(), BuildError>;

    /// Fails with [`BuildError::Fetch`] when the image cannot be resolved.
    fn append_image(&mut self, url: &str, alt: &str) -> Result<(), BuildError>;

    /// A citation of footnote `identifier`, whose definition is `text`.
    fn append_footnote(&mut self, identifier: &str, text: &str) -> Result<(), BuildError>;
}

/// An image op that was left out of the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedImage {
    pub url: String,
    pub reason: String,
}

/// What [`apply`] had to leave out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub skipped_images: Vec<SkippedImage>,
}

/// Replays every op of `doc` against `builder`, in order.
///
/// Image fetch failures are skipped and reported; any other builder error
/// stops the run.
pub fn apply<B>(doc: &ParsedDoc, builder: &mut B) -> Result<ApplyReport, BuildError>
where
    B: DocumentBuilder + ?Sized,
{
    let mut report = ApplyReport::default();
    builder.set_references(&doc.references);
    builder.begin_document()?;

    for op in &doc.ops {
        let result = match op {
            BlockOp::Heading { level, runs } => builder.append_heading(*level, runs),
            BlockOp::Paragraph { runs } => builder.append_paragraph(runs),
            BlockOp::ListItem {
                level,
                ordered,
                runs,
            } => builder.append_list_item(*level, *ordered, runs),
            BlockOp::Table(t) => builder.append_table(&t.header, &t.alignments, &t.rows),
            BlockOp::Blockquote { runs } => builder.append_blockquote(runs),
            BlockOp::CodeBlock { text, language } => {
                builder.append_code_block(text, language.as_deref())
            }
            BlockOp::HorizontalRule => builder.append_horizontal_rule(),
            BlockOp::Image { url, alt } => builder.append_image(url, alt),
            BlockOp::FootnoteRef { identifier } => {
                let text = doc.footnote_text(identifier).unwrap_or_default();
                builder.append_footnote(identifier, text)
            }
        };

        match result {
            Err(BuildError::Fetch { url, source }) => {
                log::warn!("skipping image {url}: {source}");
                report.skipped_images.push(SkippedImage {
                    url,
                    reason: source.to_string(),
                });
            }
            other => other?,
        }
    }

    builder.end_document()?;
    Ok(report)
}
