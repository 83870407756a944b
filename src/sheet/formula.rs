//! Formula text helpers.

use regex::Regex;
use std::sync::LazyLock;

static CELL_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$?[A-Z]{1,3}(\$?)(\d+)").expect("valid cell reference pattern"));

/// Shift every relative row reference in `formula` by `offset`, the way a
/// copied row's formulas follow the copy. Absolute rows (`A$7`), text inside
/// string literals and function names such as `LOG10(` are left alone.
pub fn shift_rows(formula: &str, offset: i64) -> String {
    let mut out = String::with_capacity(formula.len() + 4);

    // even segments are formula text, odd segments are "string literals"
    for (i, segment) in formula.split('"').enumerate() {
        if i > 0 {
            out.push('"');
        }
        if i % 2 == 1 {
            out.push_str(segment);
        } else {
            out.push_str(&shift_segment(segment, offset));
        }
    }

    out
}

fn shift_segment(text: &str, offset: i64) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for caps in CELL_REF.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        let (start, end) = (whole.start(), whole.end());

        let before = start.checked_sub(1).map(|i| bytes[i]);
        let after = bytes.get(end).copied();
        let is_name_part = |b: u8| b.is_ascii_alphanumeric() || b == b'_' || b == b'.';
        if before.is_some_and(is_name_part) || after.is_some_and(|b| is_name_part(b) || b == b'(') {
            continue;
        }

        let absolute = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
        let Some(digits) = caps.get(2) else { continue };
        let Ok(row) = digits.as_str().parse::<i64>() else {
            continue;
        };
        let shifted = row + offset;
        if absolute || shifted < 1 {
            continue;
        }

        out.push_str(&text[last..digits.start()]);
        out.push_str(&shifted.to_string());
        last = end;
    }

    out.push_str(&text[last..]);
    out
}
