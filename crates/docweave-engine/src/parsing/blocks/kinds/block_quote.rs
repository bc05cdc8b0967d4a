use crate::parsing::lines::indentation;

/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips one level of quote marking from a line.
    ///
    /// Removes leading indentation, the `>` and at most one following space.
    /// Returns `None` when the line is not a blockquote line. Deeper levels
    /// (`>> x`) keep their remaining markers as text.
    pub fn strip_marker(line: &str) -> Option<&str> {
        let (_, idx) = indentation(line);
        let rest = line[idx..].strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}
