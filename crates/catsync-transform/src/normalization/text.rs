//! Free-text field clamping.

/// Maximum length for free-text fields in the target schema.
pub const TEXT_FIELD_LIMIT: usize = 60;

/// Clips `value` to at most `limit` characters, cutting at the limit
/// boundary (not necessarily a word boundary). Never fails and never drops
/// the field entirely.
pub fn truncate(value: &str, limit: usize) -> String {
    value.chars().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate("Stadium Cup", TEXT_FIELD_LIMIT), "Stadium Cup");
    }

    #[test]
    fn long_text_clips_at_limit() {
        let long = "x".repeat(100);
        let clipped = truncate(&long, TEXT_FIELD_LIMIT);
        assert_eq!(clipped.chars().count(), TEXT_FIELD_LIMIT);
    }

    #[test]
    fn cuts_mid_word() {
        assert_eq!(truncate("hello world", 7), "hello w");
    }

    #[test]
    fn counts_characters_not_bytes() {
        let text = "åéîøü-long";
        assert_eq!(truncate(text, 5), "åéîøü");
    }
}
