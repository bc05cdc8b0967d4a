/// ATX heading (`# Title` through `###### Title`).
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: u8 = 6;

    /// Parses a heading line into `(level, text)`.
    ///
    /// Needs one to six markers, whitespace, then non-empty text. A closing
    /// run of markers separated by whitespace is dropped (`## A ##` → `A`).
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let t = line.trim_start();
        let run = t.bytes().take_while(|&b| b == Self::MARKER).count();
        if run == 0 || run > Self::MAX_LEVEL as usize {
            return None;
        }

        let rest = &t[run..];
        if !rest.starts_with([' ', '\t']) {
            return None;
        }

        let text = strip_closing_sequence(rest.trim());
        if text.is_empty() {
            return None;
        }
        Some((run as u8, text))
    }
}

fn strip_closing_sequence(text: &str) -> &str {
    let without = text.trim_end_matches(Heading::MARKER as char);
    if without.len() == text.len() {
        return text;
    }
    if without.ends_with([' ', '\t']) {
        without.trim_end()
    } else {
        text
    }
}
