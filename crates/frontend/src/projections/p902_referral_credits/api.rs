use crate::shared::api_utils::api_url;
use crate::system::auth::storage;
use contracts::projections::p902_referral_credits::ReferralCredits;
use gloo_net::http::Request;

/// Referral credit balance of the signed-in guest.
///
/// Anonymous visitors get an empty balance rather than an error so the
/// booking flow can call this unconditionally.
pub async fn get_referral_credits() -> Result<ReferralCredits, String> {
    let token = match storage::get_access_token() {
        Some(token) => token,
        None => return Ok(ReferralCredits::default()),
    };

    let response = Request::get(&api_url("/api/referrals/credits"))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
