//! Positional price-code split.

/// Splits a supplier price-code string into one single-character code per
/// pricing slot, positionally: code `i` belongs to tier slot `i`.
///
/// Short input leaves the remaining slots empty; extra characters beyond
/// `slots` are discarded.
pub fn split_price_code(code: &str, slots: usize) -> Vec<Option<char>> {
    let mut chars = code.trim().chars();
    (0..slots).map(|_| chars.next()).collect()
}
