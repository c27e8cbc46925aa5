use crate::shared::api_utils::{api_url, decode_error, ApiError};
use contracts::domain::b003_blocked_date::{BlockedDate, BlockedDateDto};
use gloo_net::http::Request;

pub async fn create_blocked_date(dto: &BlockedDateDto) -> Result<BlockedDate, ApiError> {
    let response = Request::post(&api_url("/api/blocked-dates"))
        .json(dto)
        .map_err(|e| ApiError::message(format!("Failed to encode payload: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::message(format!("Request failed: {}", e)))?;

    if !response.ok() {
        return Err(decode_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::message(format!("Failed to parse response: {}", e)))
}

pub async fn delete_blocked_date(id: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/blocked-dates/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}
