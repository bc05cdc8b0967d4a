/// Horizontal rule: a line made only of three or more `-`, `*` or `_`.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [u8; 3] = [b'-', b'*', b'_'];
    pub const MIN_RUN: usize = 3;

    pub fn matches(line: &str) -> bool {
        let t = line.trim().as_bytes();
        match t.first() {
            Some(m) if Self::MARKERS.contains(m) => {
                t.len() >= Self::MIN_RUN && t.iter().all(|b| b == m)
            }
            _ => false,
        }
    }
}
