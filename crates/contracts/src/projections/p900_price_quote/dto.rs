use serde::{Deserialize, Serialize};

// ============================================================================
// Cancellation policy
// ============================================================================

/// Guest-selected refund terms. Non-refundable grants a 10% discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CancellationPolicy {
    #[default]
    Flex,
    NonRefundable,
}

impl CancellationPolicy {
    pub fn label(&self) -> &'static str {
        match self {
            CancellationPolicy::Flex => "Flexible",
            CancellationPolicy::NonRefundable => "Non-refundable (-10%)",
        }
    }
}

// ============================================================================
// Wire quote
// ============================================================================

/// Raw pricing response from `POST /api/pricing/calculate`.
/// All amounts are decimal-as-string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PriceQuote {
    pub nightly_rate: String,
    pub accommodation_total: String,
    pub cleaning_fee: String,
    pub extra_guest_fee: String,
    pub tourist_tax: String,
    pub total: String,
}

// ============================================================================
// Display breakdown
// ============================================================================

/// Fully derived breakdown shown to the guest; see
/// [`super::derive::derive_display_pricing`]. All figures rounded to cents,
/// `total_after_credit` guaranteed non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DisplayPricing {
    pub nightly_rate: f64,
    pub accommodation_total: f64,
    pub cleaning_fee: f64,
    pub extra_guest_fee: f64,
    pub tourist_tax: f64,
    pub total: f64,
    pub discount: f64,
    pub total_after_policy: f64,
    pub applied_credit: f64,
    pub total_after_credit: f64,
}
