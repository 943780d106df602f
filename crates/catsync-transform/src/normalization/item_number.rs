//! Canonical item-number form.

/// Normalizes an item number: collapses runs of whitespace to single spaces,
/// trims, and lowercases a standalone dimension-separator `X` between
/// digits, inserting spaces around it (`"3020-10 X 8"` → `"3020-10 x 8"`,
/// `"10X8"` → `"10 x 8"`).
///
/// Only an `X` whose nearest non-space neighbors on both sides are digits is
/// treated as a dimension separator; all other casing is preserved, so
/// `"XL-500"` and `"BOX 12"` pass through untouched.
pub fn normalize_item_number(raw: &str) -> String {
    let collapsed: Vec<char> = {
        let joined = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        joined.chars().collect()
    };

    let mut out = String::with_capacity(collapsed.len() + 4);
    for (i, &c) in collapsed.iter().enumerate() {
        if (c == 'X' || c == 'x') && is_dimension_separator(&collapsed, i) {
            if !out.ends_with(' ') {
                out.push(' ');
            }
            out.push('x');
            if !matches!(collapsed.get(i + 1), Some(' ') | None) {
                out.push(' ');
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn is_dimension_separator(chars: &[char], i: usize) -> bool {
    let prev = chars[..i].iter().rev().find(|c| **c != ' ');
    let next = chars[i + 1..].iter().find(|c| **c != ' ');
    matches!((prev, next), (Some(p), Some(n)) if p.is_ascii_digit() && n.is_ascii_digit())
}
