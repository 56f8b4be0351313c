//! Refund amount rules.

/// Normalizes a requested refund to a non-positive amount.
///
/// Callers may pass either "refund this much" (positive) or an already
/// negative value; both mean the same reversal.
pub fn normalize_refund_amount(amount: f64) -> f64 {
    if amount > 0.0 { -amount } else { amount }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_is_negated() {
        assert_eq!(normalize_refund_amount(2.5), -2.5);
    }

    #[test]
    fn test_negative_is_unchanged() {
        assert_eq!(normalize_refund_amount(-2.5), -2.5);
    }

    #[test]
    fn test_zero_is_unchanged() {
        assert_eq!(normalize_refund_amount(0.0), 0.0);
    }
}
