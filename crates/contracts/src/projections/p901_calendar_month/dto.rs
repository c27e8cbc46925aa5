use crate::domain::b001_booking::status::BookingStatus;
use crate::domain::b003_blocked_date::aggregate::BlockReason;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-day projection status in the PMS month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    #[default]
    Available,
    Booked,
    Blocked,
    CheckIn,
    CheckOut,
}

/// Compact booking reference attached to calendar days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingSummary {
    pub id: String,
    pub booking_id: String,
    pub guest_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: BookingStatus,
    #[serde(default)]
    pub number_of_guests: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockedSummary {
    pub id: String,
    pub reason: BlockReason,
    #[serde(default)]
    pub notes: String,
}

/// One day of `GET /api/bookings/calendar/{year}/{month}`. Read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub status: DayStatus,
    #[serde(default)]
    pub booking: Option<BookingSummary>,
    #[serde(default)]
    pub blocked: Option<BlockedSummary>,
}
