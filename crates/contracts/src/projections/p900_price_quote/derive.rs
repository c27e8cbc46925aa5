use super::dto::{CancellationPolicy, DisplayPricing, PriceQuote};
use crate::shared::money::{parse_amount_or_zero, round2};

/// Discount granted for choosing the non-refundable policy.
const NON_REFUNDABLE_DISCOUNT: f64 = 0.10;

/// Turn a raw server quote plus the guest's UI choices into a displayable
/// breakdown. Pure function, re-run on every input change.
///
/// The server is authoritative for every figure; the only local correction is
/// substituting `nightly_rate × nights` when `accommodation_total` comes back
/// zero or empty (a known server gap, not a second source of truth).
pub fn derive_display_pricing(
    quote: &PriceQuote,
    nights: i64,
    policy: CancellationPolicy,
    use_credits: bool,
    available_credits: f64,
) -> DisplayPricing {
    let nightly_rate = parse_amount_or_zero(&quote.nightly_rate);

    let mut accommodation_total = parse_amount_or_zero(&quote.accommodation_total);
    if accommodation_total <= 0.0 && nightly_rate > 0.0 && nights > 0 {
        accommodation_total = round2(nightly_rate * nights as f64);
    }

    let total = parse_amount_or_zero(&quote.total);
    let discount = match policy {
        CancellationPolicy::NonRefundable => round2(total * NON_REFUNDABLE_DISCOUNT),
        CancellationPolicy::Flex => 0.0,
    };
    let total_after_policy = round2(total - discount);

    let applied_credit = if use_credits {
        round2(available_credits.max(0.0).min(total_after_policy))
    } else {
        0.0
    };
    let total_after_credit = round2((total_after_policy - applied_credit).max(0.0));

    DisplayPricing {
        nightly_rate,
        accommodation_total,
        cleaning_fee: parse_amount_or_zero(&quote.cleaning_fee),
        extra_guest_fee: parse_amount_or_zero(&quote.extra_guest_fee),
        tourist_tax: parse_amount_or_zero(&quote.tourist_tax),
        total,
        discount,
        total_after_policy,
        applied_credit,
        total_after_credit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(total: &str) -> PriceQuote {
        PriceQuote {
            nightly_rate: "50.00".into(),
            accommodation_total: "150.00".into(),
            cleaning_fee: "30.00".into(),
            extra_guest_fee: "0.00".into(),
            tourist_tax: "20.00".into(),
            total: total.into(),
        }
    }

    #[test]
    fn flex_policy_keeps_total() {
        let pricing =
            derive_display_pricing(&quote("200.00"), 3, CancellationPolicy::Flex, false, 0.0);
        assert_eq!(pricing.discount, 0.0);
        assert_eq!(pricing.total_after_policy, 200.0);
        assert_eq!(pricing.total_after_credit, 200.0);
    }

    #[test]
    fn non_refundable_discount_is_ten_percent() {
        let pricing = derive_display_pricing(
            &quote("200.00"),
            3,
            CancellationPolicy::NonRefundable,
            false,
            0.0,
        );
        assert_eq!(pricing.discount, 20.0);
        assert_eq!(pricing.total_after_policy, 180.0);
    }

    #[test]
    fn accommodation_fallback_from_nightly_rate() {
        let mut q = quote("200.00");
        q.accommodation_total = "0.00".into();
        let pricing = derive_display_pricing(&q, 3, CancellationPolicy::Flex, false, 0.0);
        assert_eq!(pricing.accommodation_total, 150.0);

        q.accommodation_total = String::new();
        let pricing = derive_display_pricing(&q, 3, CancellationPolicy::Flex, false, 0.0);
        assert_eq!(pricing.accommodation_total, 150.0);

        // No fallback without a nights figure.
        let pricing = derive_display_pricing(&q, 0, CancellationPolicy::Flex, false, 0.0);
        assert_eq!(pricing.accommodation_total, 0.0);
    }

    #[test]
    fn credit_clamped_to_due_total() {
        let pricing = derive_display_pricing(
            &quote("150.00"),
            3,
            CancellationPolicy::Flex,
            true,
            500.0,
        );
        assert_eq!(pricing.applied_credit, 150.0);
        assert_eq!(pricing.total_after_credit, 0.0);
    }

    #[test]
    fn credit_ignored_when_not_opted_in() {
        let pricing = derive_display_pricing(
            &quote("150.00"),
            3,
            CancellationPolicy::Flex,
            false,
            500.0,
        );
        assert_eq!(pricing.applied_credit, 0.0);
        assert_eq!(pricing.total_after_credit, 150.0);
    }

    #[test]
    fn totals_never_negative() {
        let pricing = derive_display_pricing(
            &quote("100.00"),
            3,
            CancellationPolicy::NonRefundable,
            true,
            1000.0,
        );
        assert_eq!(pricing.applied_credit, 90.0);
        assert_eq!(pricing.total_after_credit, 0.0);
    }
}
