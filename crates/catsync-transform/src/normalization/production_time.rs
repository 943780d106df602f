//! Production-time phrase construction.

/// Builds the two-sided production-time phrase, e.g. "5 to 10 Working Days".
///
/// The downstream store parses the phrase as a range, so equal bounds still
/// render both sides ("5 to 5 Working Days") rather than collapsing to a
/// single number. A missing low bound yields no phrase at all; a missing
/// high bound falls back to the low bound.
pub fn production_time(low: Option<i64>, high: Option<i64>) -> Option<String> {
    let low = low?;
    let high = high.unwrap_or(low);
    Some(format!("{low} to {high} Working Days"))
}
