use serde::Serialize;

/// Style flags shared by every character of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Style {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub superscript: bool,
    pub subscript: bool,
    /// Inline code span. No other inline syntax is parsed inside it.
    pub code: bool,
}

impl Style {
    #[must_use]
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }

    /// Short `+`-joined flag names (`bold+italic`), empty for plain text.
    pub fn label(&self) -> String {
        let flags = [
            (self.bold, "bold"),
            (self.italic, "italic"),
            (self.strikethrough, "strike"),
            (self.superscript, "sup"),
            (self.subscript, "sub"),
            (self.code, "code"),
        ];
        flags
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, name)| *name)
            .collect::<Vec<_>>()
            .join("+")
    }
}

/// Link target attached to a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub url: String,
    pub title: Option<String>,
}

/// A contiguous span of text sharing one style and link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledRun {
    pub text: String,
    pub style: Style,
    pub link: Option<Link>,
}

impl StyledRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
            link: None,
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            link: None,
        }
    }

    /// True when `other` can be appended to this run without changing either.
    pub fn same_format(&self, other: &StyledRun) -> bool {
        self.style == other.style && self.link == other.link
    }
}

/// Concatenated text of all runs, formatting dropped.
pub fn plain_text(runs: &[StyledRun]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}
