//! Monetary amounts on the wire are decimal strings ("142.50").
//!
//! The API owns all pricing; this module only parses, rounds and formats for
//! display and for the handful of client-side derivations (discount, credit
//! clamp, accommodation fallback).

/// Parse a decimal-as-string amount. Empty or malformed input yields `None`.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse an amount, treating empty/malformed input as zero.
pub fn parse_amount_or_zero(raw: &str) -> f64 {
    parse_amount(raw).unwrap_or(0.0)
}

/// Round to two decimal places (cents).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format an amount with exactly two decimals, as the API sends it.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", round2(value))
}

/// Balances at or below this threshold count as fully settled.
/// Keeps float residue from credit application from blocking checkout skip.
pub const SETTLED_EPSILON: f64 = 0.01;

/// True when an outstanding balance is negligible (fully covered).
pub fn is_settled(amount_due: f64) -> bool {
    amount_due <= SETTLED_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("142.50"), Some(142.5));
        assert_eq!(parse_amount("  80 "), Some(80.0));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn test_round_and_format() {
        assert_eq!(round2(19.999), 20.0);
        assert_eq!(format_amount(20.0), "20.00");
        assert_eq!(format_amount(179.996), "180.00");
        assert_eq!(format_amount(0.005), "0.01");
    }

    #[test]
    fn test_settled() {
        assert!(is_settled(0.0));
        assert!(is_settled(0.01));
        assert!(!is_settled(0.02));
    }
}
