pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use parsing::{
    Alignment, BlockOp, Link, ParseOptions, ParsedDoc, ReferenceTables, Style, StyledRun,
    TableBlock, parse_document, parse_document_with,
};
pub use render::{
    ApplyReport, BuildError, DocumentBuilder, FetchError, HtmlWriter, ImageResolver,
    LocalImageResolver, PassthroughResolver, SkippedImage, apply,
};
