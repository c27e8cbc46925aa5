//! Client for the per-booking guest registration endpoints.

use crate::shared::api_utils::{api_url, decode_error, ApiError};
use contracts::domain::b002_guest_registry::{BookingGuest, BookingGuestDto};
use gloo_net::http::Request;

pub async fn list_guests(booking_id: &str) -> Result<Vec<BookingGuest>, String> {
    let response = Request::get(&api_url(&format!("/api/bookings/{}/guests", booking_id)))
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

pub async fn register_guest(
    booking_id: &str,
    dto: &BookingGuestDto,
) -> Result<BookingGuest, ApiError> {
    let response = Request::post(&api_url(&format!("/api/bookings/{}/guests", booking_id)))
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

pub async fn update_guest(
    booking_id: &str,
    guest_id: &str,
    dto: &BookingGuestDto,
) -> Result<BookingGuest, ApiError> {
    let response = Request::put(&api_url(&format!(
        "/api/bookings/{}/guests/{}",
        booking_id, guest_id
    )))
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

pub async fn remove_guest(booking_id: &str, guest_id: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!(
        "/api/bookings/{}/guests/{}",
        booking_id, guest_id
    )))
    .send()
    .await
    .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}
