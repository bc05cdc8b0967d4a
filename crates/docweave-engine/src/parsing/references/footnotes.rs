use std::sync::OnceLock;

use regex::Regex;

use super::{ReferenceTables, normalize_label};
use crate::parsing::inline::kinds::RawZone;

/// Removes defined `[^id]` markers from `text`.
///
/// Returns the remaining text and the normalized identifiers of the removed
/// markers in the order they appeared. Markers without a definition stay in
/// the text as written.
pub fn extract_footnote_refs(text: &str, refs: &ReferenceTables) -> (String, Vec<String>) {
    static FOOTNOTE_REF: OnceLock<Regex> = OnceLock::new();
    let re = FOOTNOTE_REF
        .get_or_init(|| Regex::new(r"\[\^([^\]\s]+)\]").expect("Invalid footnote reference regex"));

    let raw = RawZone::ranges(text);
    let mut zones = raw.iter().peekable();
    let mut ids = Vec::new();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for caps in re.captures_iter(text) {
        let (Some(whole), Some(id)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        while zones.next_if(|z| z.end <= whole.start()).is_some() {}
        let in_raw = zones.peek().is_some_and(|z| z.start <= whole.start());
        if in_raw || refs.footnote(id.as_str()).is_none() {
            continue;
        }
        out.push_str(&text[last..whole.start()]);
        ids.push(normalize_label(id.as_str()));
        last = whole.end();
    }
    out.push_str(&text[last..]);
    (out, ids)
}
