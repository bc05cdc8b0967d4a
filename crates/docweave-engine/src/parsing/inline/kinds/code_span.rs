/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones" - no other inline parsing occurs inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Matches a code span opening at `at`.
    ///
    /// The closing run must have the same number of backticks as the opening
    /// run. Returns `(inner_start, inner_end, end)` byte offsets, or `None`
    /// when the span is not closed.
    pub fn match_at(s: &str, at: usize) -> Option<(usize, usize, usize)> {
        let b = s.as_bytes();
        let open = run_len(b, at);
        if open == 0 {
            return None;
        }

        let inner_start = at + open;
        let mut i = inner_start;
        while i < b.len() {
            if b[i] == Self::TICK {
                let run = run_len(b, i);
                if run == open {
                    return Some((inner_start, i, i + run));
                }
                i += run;
            } else {
                i += 1;
            }
        }
        None
    }

    /// Number of backticks in the run starting at `at`.
    pub fn open_len(s: &str, at: usize) -> usize {
        run_len(s.as_bytes(), at)
    }
}

fn run_len(b: &[u8], at: usize) -> usize {
    b.get(at..)
        .map(|rest| rest.iter().take_while(|&&c| c == CodeSpan::TICK).count())
        .unwrap_or(0)
}
