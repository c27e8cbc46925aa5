use crate::shared::api_utils::api_url;
use contracts::system::auth::UserInfo;
use gloo_net::http::Request;

/// Resolve the current user for a stored token. A failure just means the
/// session is anonymous; it is never surfaced as an error.
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, String> {
    let response = Request::get(&api_url("/api/auth/me"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<UserInfo>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
