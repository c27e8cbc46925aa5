use crate::shared::money::parse_amount_or_zero;
use serde::{Deserialize, Serialize};

/// Referral-ledger balance from `GET /api/referrals/credits`.
///
/// The ledger service has shipped both key spellings over time; accept either
/// and let `balance()` pick whichever is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ReferralCredits {
    #[serde(default)]
    pub available_balance: Option<String>,
    #[serde(default)]
    pub available_credits: Option<String>,
}

impl ReferralCredits {
    pub fn balance(&self) -> f64 {
        self.available_balance
            .as_deref()
            .or(self.available_credits.as_deref())
            .map(parse_amount_or_zero)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_either_key() {
        let json = r#"{"available_balance":"120.00"}"#;
        let credits: ReferralCredits = serde_json::from_str(json).unwrap();
        assert_eq!(credits.balance(), 120.0);

        let json = r#"{"available_credits":"35.50"}"#;
        let credits: ReferralCredits = serde_json::from_str(json).unwrap();
        assert_eq!(credits.balance(), 35.5);

        let credits: ReferralCredits = serde_json::from_str("{}").unwrap();
        assert_eq!(credits.balance(), 0.0);
    }
}
