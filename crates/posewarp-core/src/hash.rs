//! Text encoding of rule state: `entry ("&" entry)*` with
//! `entry = index "=" code`, `index` a decimal joint position and `code`
//! exactly 3 characters. This is the sole persisted-state format; it is
//! human-editable, so decoding is best-effort and skips malformed entries
//! individually instead of failing the whole import.
//!
//! Codes never contain `&` or `=` (true for the catalog); no escaping is
//! supported.

use crate::catalog::RuleCode;

/// Join `(index, code)` pairs into the compact text form. Empty input
/// produces the empty string.
pub fn encode<I>(entries: I) -> String
where
    I: IntoIterator<Item = (usize, RuleCode)>,
{
    let parts: Vec<String> = entries
        .into_iter()
        .map(|(idx, code)| format!("{idx}={code}"))
        .collect();
    parts.join("&")
}

/// Parse the text form into `(index, code)` pairs, keeping only well-formed
/// entries: exactly one `=`, an all-digit index that fits `usize`, and a
/// 3-character code. Range-checking the index against the joint list is the
/// caller's concern.
pub fn decode(text: &str) -> Vec<(usize, RuleCode)> {
    if text.is_empty() {
        return Vec::new();
    }
    let mut entries = Vec::new();
    for entry in text.split('&') {
        let parts: Vec<&str> = entry.split('=').collect();
        if parts.len() != 2 {
            log::debug!("skipping malformed hash entry {entry:?}");
            continue;
        }
        if !parts[0].bytes().all(|b| b.is_ascii_digit()) {
            log::debug!("skipping hash entry with non-decimal index {entry:?}");
            continue;
        }
        let idx = match parts[0].parse::<usize>() {
            Ok(idx) => idx,
            Err(_) => {
                log::debug!("skipping hash entry with unparseable index {entry:?}");
                continue;
            }
        };
        let code = match RuleCode::parse(parts[1]) {
            Ok(code) => code,
            Err(_) => {
                log::debug!("skipping hash entry with wrong-length code {entry:?}");
                continue;
            }
        };
        entries.push((idx, code));
    }
    entries
}
