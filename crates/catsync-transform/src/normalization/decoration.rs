//! Included-decoration merge.

/// Separator between the color, location, and method segments.
pub const DECORATION_SEPARATOR: &str = "|";

/// Replacement for the supplier sentinel meaning "no decoration included".
pub const NO_IMPRINT: &str = "No Imprint";

/// Sentinel suppliers write when the listed price includes no imprint.
const BLANK_SENTINEL: &str = "Blank";

/// Merges the include-color, include-location, and decoration-method fields
/// into the single included-decoration string, e.g.
/// `"One Color|One Location|Screen Print"`.
///
/// Any input exactly equal to `"Blank"` is replaced with `"No Imprint"`
/// before joining.
pub fn included_decoration(color: &str, location: &str, method: &str) -> String {
    [color, location, method]
        .map(desentinel)
        .join(DECORATION_SEPARATOR)
}

fn desentinel(value: &str) -> &str {
    if value == BLANK_SENTINEL { NO_IMPRINT } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_three_segments() {
        assert_eq!(
            included_decoration("One Color", "One Location", "Screen Print"),
            "One Color|One Location|Screen Print"
        );
    }

    #[test]
    fn blank_sentinel_becomes_no_imprint() {
        assert_eq!(
            included_decoration("Blank", "Main", "Embroidery"),
            "No Imprint|Main|Embroidery"
        );
    }

    #[test]
    fn sentinel_applies_to_any_segment() {
        assert_eq!(
            included_decoration("One Color", "Blank", "Blank"),
            "One Color|No Imprint|No Imprint"
        );
    }
}
