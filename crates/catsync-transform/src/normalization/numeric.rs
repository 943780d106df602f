//! Price and quantity parsing with the zero-sanitizer policy.
//!
//! The target schema reads 0/blank as "this pricing tier does not exist", so
//! a literal 0 in a price or tier-quantity column would be misread as a free
//! price. Zero-equivalent input therefore parses to *absent*, never to 0.

use catsync_model::{CatalogError, Result};

/// Parses a price column. Absent/empty/zero ⇒ `None`; non-numeric text is a
/// row-scoped error.
pub fn parse_price(field: &'static str, raw: Option<&str>) -> Result<Option<f64>> {
    let Some(text) = non_empty(raw) else {
        return Ok(None);
    };
    let value: f64 = text
        .parse()
        .map_err(|_| invalid(field, text))?;
    if value == 0.0 { Ok(None) } else { Ok(Some(value)) }
}

/// Parses a tier-quantity column. Absent/empty/zero ⇒ `None`; non-numeric or
/// negative input is a row-scoped error. Accepts the "100.0" float rendering
/// some exports use for integer columns.
pub fn parse_quantity(field: &'static str, raw: Option<&str>) -> Result<Option<u32>> {
    let Some(text) = non_empty(raw) else {
        return Ok(None);
    };
    let value = parse_integral(text).ok_or_else(|| invalid(field, text))?;
    match value {
        0 => Ok(None),
        v if v < 0 => Err(invalid(field, text)),
        v => Ok(Some(v as u32)),
    }
}

/// Parses an inventory column. Unlike tier quantities, zero is meaningful
/// here — "0 on hand" drives the disable decision and is distinct from an
/// absent column.
pub fn parse_inventory(field: &'static str, raw: Option<&str>) -> Result<Option<i64>> {
    let Some(text) = non_empty(raw) else {
        return Ok(None);
    };
    parse_integral(text)
        .map(Some)
        .ok_or_else(|| invalid(field, text))
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|text| !text.is_empty())
}

fn parse_integral(text: &str) -> Option<i64> {
    if let Ok(v) = text.parse::<i64>() {
        return Some(v);
    }
    let v: f64 = text.parse().ok()?;
    if v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
        Some(v as i64)
    } else {
        None
    }
}

fn invalid(field: &'static str, value: &str) -> CatalogError {
    CatalogError::InvalidNumber {
        field,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_price_is_absent() {
        assert_eq!(parse_price("Prc1", Some("0")).unwrap(), None);
        assert_eq!(parse_price("Prc1", Some("0.00")).unwrap(), None);
        assert_eq!(parse_price("Prc1", Some("1.25")).unwrap(), Some(1.25));
    }

    #[test]
    fn empty_quantity_is_absent() {
        assert_eq!(parse_quantity("Qty1", None).unwrap(), None);
        assert_eq!(parse_quantity("Qty1", Some("  ")).unwrap(), None);
        assert_eq!(parse_quantity("Qty1", Some("0")).unwrap(), None);
    }

    #[test]
    fn float_rendering_of_integer_quantity_parses() {
        assert_eq!(parse_quantity("Qty1", Some("100.0")).unwrap(), Some(100));
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(parse_price("Prc1", Some("call for pricing")).is_err());
        assert!(parse_quantity("Qty1", Some("12.5")).is_err());
        assert!(parse_quantity("Qty1", Some("-5")).is_err());
    }

    #[test]
    fn inventory_keeps_zero() {
        assert_eq!(parse_inventory("QtyAvailable", Some("0")).unwrap(), Some(0));
        assert_eq!(parse_inventory("QtyAvailable", None).unwrap(), None);
        assert_eq!(parse_inventory("QtyAvailable", Some("-3")).unwrap(), Some(-3));
    }
}
