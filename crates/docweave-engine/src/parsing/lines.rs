/// Splits `text` into lines using universal newline rules.
///
/// `\r\n`, `\r` and `\n` all terminate a line. The terminator is not part of
/// the returned slice, and a trailing terminator does not produce an extra
/// empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let b = text.as_bytes();
    let mut out = vec![];
    let mut start = 0usize;
    let mut i = 0usize;

    while i < b.len() {
        match b[i] {
            b'\n' => {
                out.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                out.push(&text[start..i]);
                i += 1;
                if b.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < b.len() {
        out.push(&text[start..]);
    }
    out
}

/// Returns true if the line holds nothing but whitespace.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Measures leading indentation in columns. A tab counts as four columns.
///
/// Returns `(columns, byte_offset)` where `byte_offset` is the index of the
/// first non-indentation byte.
pub fn indentation(line: &str) -> (usize, usize) {
    let mut cols = 0usize;
    for (i, b) in line.bytes().enumerate() {
        match b {
            b' ' => cols += 1,
            b'\t' => cols += 4,
            _ => return (cols, i),
        }
    }
    (cols, line.len())
}
