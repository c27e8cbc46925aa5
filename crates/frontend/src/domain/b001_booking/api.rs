//! Typed client for the booking endpoints of the remote API.

use crate::shared::api_utils::{api_url, decode_error, ApiError};
use chrono::NaiveDate;
use contracts::domain::b001_booking::{
    AvailabilityResponse, Booking, BookingDto, CheckoutSession, CreateBookingRequest,
};
use contracts::projections::p900_price_quote::PriceQuote;
use contracts::projections::p901_calendar_month::CalendarDay;
use gloo_net::http::Request;

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub async fn check_availability(check_in: NaiveDate, check_out: NaiveDate) -> Result<bool, String> {
    let url = api_url(&format!(
        "/api/bookings/check-availability?check_in={}&check_out={}",
        iso(check_in),
        iso(check_out)
    ));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let data: AvailabilityResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(data.available)
}

pub async fn calculate_price(
    check_in: NaiveDate,
    check_out: NaiveDate,
    guest_count: u32,
) -> Result<PriceQuote, String> {
    let url = api_url(&format!(
        "/api/pricing/calculate?check_in={}&check_out={}&guests={}",
        iso(check_in),
        iso(check_out),
        guest_count
    ));
    let response = Request::get(&url)
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

/// Create a booking from the public flow.
pub async fn create_booking(payload: &CreateBookingRequest) -> Result<Booking, ApiError> {
    let response = Request::post(&api_url("/api/bookings"))
        .json(payload)
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

/// Create a booking record from the PMS side panel.
pub async fn create_booking_record(dto: &BookingDto) -> Result<Booking, ApiError> {
    let response = Request::post(&api_url("/api/bookings"))
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

pub async fn update_booking(id: &str, dto: &BookingDto) -> Result<Booking, ApiError> {
    let response = Request::put(&api_url(&format!("/api/bookings/{}", id)))
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

pub async fn fetch_booking(id: &str) -> Result<Booking, String> {
    let response = Request::get(&api_url(&format!("/api/bookings/{}", id)))
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

/// Used as a compensating rollback when checkout-session creation fails
/// after the booking was already created.
pub async fn delete_booking(id: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/bookings/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}

pub async fn create_checkout_session(booking_id: &str) -> Result<CheckoutSession, String> {
    let response = Request::post(&api_url(&format!(
        "/api/bookings/{}/checkout-session",
        booking_id
    )))
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

/// Bookings of the signed-in guest (self-service area).
pub async fn my_bookings(access_token: &str) -> Result<Vec<Booking>, String> {
    let response = Request::get(&api_url("/api/bookings/mine"))
        .header("Authorization", &format!("Bearer {}", access_token))
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

pub async fn fetch_calendar(year: i32, month: u32) -> Result<Vec<CalendarDay>, String> {
    let response = Request::get(&api_url(&format!(
        "/api/bookings/calendar/{}/{}",
        year, month
    )))
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
