use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// A line that looks like a fence delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig<'a> {
    pub kind: FenceKind,
    /// Text after the marker run, trimmed (`rust` in ```` ```rust ````).
    pub info: &'a str,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICK: u8 = b'`';
    pub const TILDE: u8 = b'~';
    /// Shortest marker run that counts as a fence.
    pub const MIN_RUN: usize = 3;

    pub fn sig(line: &str) -> Option<FenceSig<'_>> {
        let t = line.trim_start();
        let marker = *t.as_bytes().first()?;
        let kind = match marker {
            Self::BACKTICK => FenceKind::Backticks,
            Self::TILDE => FenceKind::Tildes,
            _ => return None,
        };

        let run = t.bytes().take_while(|&b| b == marker).count();
        if run < Self::MIN_RUN {
            return None;
        }

        let info = t[run..].trim();
        // ```` ```a``` ```` is inline code, not a fence.
        if kind == FenceKind::Backticks && info.as_bytes().contains(&Self::BACKTICK) {
            return None;
        }
        Some(FenceSig { kind, info })
    }

    pub fn closes(kind: FenceKind, sig: Option<FenceSig<'_>>) -> bool {
        matches!(sig, Some(s) if s.kind == kind)
    }
}
