use crate::parsing::blocks::types::{Alignment, TableBlock};

/// Pipe table syntax: rows bounded by `|`, separator rows of `:?-+:?` cells.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';
    pub const ESCAPE: char = '\\';
    pub const RULE: char = '-';
    pub const ALIGN: char = ':';

    /// A line bounded by unescaped pipes on both ends.
    pub fn is_row(line: &str) -> bool {
        let t = line.trim();
        t.len() >= 2
            && t.starts_with(Self::PIPE)
            && t.ends_with(Self::PIPE)
            && !t.ends_with("\\|")
    }

    /// A row whose every cell is an alignment marker (`---`, `:--`, `-:`, `:-:`).
    pub fn is_separator(line: &str) -> bool {
        if !Self::is_row(line) {
            return false;
        }
        let cells = Self::cells(line);
        !cells.is_empty() && cells.iter().all(|c| Self::alignment(c).is_some())
    }

    /// Splits a row into trimmed cells.
    ///
    /// The outer pipes are dropped, cells are split on unescaped `|`, and
    /// `\|` becomes a literal pipe.
    pub fn cells(line: &str) -> Vec<String> {
        let t = line.trim();
        let t = t.strip_prefix(Self::PIPE).unwrap_or(t);
        let t = t.strip_suffix(Self::PIPE).unwrap_or(t);

        let mut cells = vec![];
        let mut cell = String::new();
        let mut chars = t.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                Self::ESCAPE if chars.peek() == Some(&Self::PIPE) => {
                    cell.push(Self::PIPE);
                    chars.next();
                }
                Self::PIPE => cells.push(std::mem::take(&mut cell).trim().to_string()),
                _ => cell.push(c),
            }
        }
        cells.push(cell.trim().to_string());
        cells
    }

    /// Reads the alignment of one separator cell.
    pub fn alignment(cell: &str) -> Option<Alignment> {
        let c = cell.trim();
        let left = c.starts_with(Self::ALIGN);
        let right = c.len() > 1 && c.ends_with(Self::ALIGN);
        let rule = c.trim_start_matches(Self::ALIGN).trim_end_matches(Self::ALIGN);
        if rule.is_empty() || !rule.chars().all(|ch| ch == Self::RULE) {
            return None;
        }
        Some(match (left, right) {
            (true, true) => Alignment::Center,
            (false, true) => Alignment::Right,
            _ => Alignment::Left,
        })
    }

    /// Builds a table from buffered row lines.
    ///
    /// The first row is the header. If the second row is a separator it
    /// supplies the alignments; otherwise every column is left aligned and
    /// all remaining rows are body rows. Alignments and body rows are
    /// normalized to the header width. Returns `None` for fewer than two rows.
    pub fn assemble<S: AsRef<str>>(rows: &[S]) -> Option<TableBlock> {
        let (first, rest) = rows.split_first()?;
        if rest.is_empty() {
            return None;
        }

        let header = Self::cells(first.as_ref());
        let width = header.len();

        let (mut alignments, body) = match rest.split_first() {
            Some((sep, body)) if Self::is_separator(sep.as_ref()) => (
                Self::cells(sep.as_ref())
                    .iter()
                    .filter_map(|c| Self::alignment(c))
                    .collect::<Vec<_>>(),
                body,
            ),
            _ => (vec![], rest),
        };
        alignments.resize(width, Alignment::Left);

        let rows = body
            .iter()
            .map(|r| {
                let mut cells = Self::cells(r.as_ref());
                cells.resize(width, String::new());
                cells
            })
            .collect();

        Some(TableBlock {
            header,
            alignments,
            rows,
        })
    }
}
