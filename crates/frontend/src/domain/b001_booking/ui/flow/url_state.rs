//! Query-parameter mirror of the booking flow, so an in-progress booking is
//! shareable and resumable via link.
//!
//! Pure functions only; the view model decides *when* to write the URL (date
//! changes immediately, guest counts debounced).

use super::FlowStep;
use crate::shared::date_utils::parse_iso_date;
use chrono::NaiveDate;
use contracts::domain::b001_booking::{DateRange, GuestCounts, GuestField};
use serde::{Deserialize, Serialize};

/// Raw query shape. Everything optional; unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BookingQuery {
    #[serde(skip_serializing_if = "Option::is_none", rename = "checkIn")]
    pub check_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "checkOut")]
    pub check_out: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adults: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infants: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<String>,
}

/// Sanitized flow state recovered from a deep link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestoredState {
    pub range: DateRange,
    pub guests: GuestCounts,
    pub step: FlowStep,
}

pub fn encode(range: DateRange, guests: GuestCounts, step: FlowStep) -> String {
    let iso = |d: NaiveDate| d.format("%Y-%m-%d").to_string();
    let query = BookingQuery {
        check_in: range.check_in.map(iso),
        check_out: range.check_out.map(iso),
        adults: Some(guests.adults as i64),
        children: Some(guests.children as i64),
        infants: Some(guests.infants as i64),
        step: match step {
            FlowStep::Plan => None,
            FlowStep::Guest => Some("guest".to_string()),
        },
    };
    serde_qs::to_string(&query).unwrap_or_default()
}

/// Decode and sanitize a query string (with or without the leading '?').
///
/// Malformed dates are silently dropped; an inverted range keeps only the
/// check-in; counts are clamped through the usual `GuestCounts` handlers.
pub fn decode(query: &str) -> RestoredState {
    let raw: BookingQuery =
        serde_qs::from_str(query.trim_start_matches('?')).unwrap_or_default();

    let check_in = raw.check_in.as_deref().and_then(parse_iso_date);
    let mut check_out = raw.check_out.as_deref().and_then(parse_iso_date);
    if let (Some(ci), Some(co)) = (check_in, check_out) {
        if co <= ci {
            check_out = None;
        }
    }

    let mut guests = GuestCounts::default();
    if let Some(adults) = raw.adults {
        guests = guests.set(GuestField::Adults, adults);
    }
    if let Some(children) = raw.children {
        guests = guests.set(GuestField::Children, children);
    }
    if let Some(infants) = raw.infants {
        guests = guests.set(GuestField::Infants, infants);
    }

    let step = match raw.step.as_deref() {
        Some("guest") => FlowStep::Guest,
        _ => FlowStep::Plan,
    };

    RestoredState {
        range: DateRange::new(check_in, check_out),
        guests,
        step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Option<NaiveDate> {
        parse_iso_date(s)
    }

    #[test]
    fn round_trip() {
        let range = DateRange::new(d("2025-07-01"), d("2025-07-05"));
        let guests = GuestCounts::new(2, 1, 0);
        let qs = encode(range, guests, FlowStep::Guest);
        let restored = decode(&qs);
        assert_eq!(restored.range, range);
        assert_eq!(restored.guests, guests);
        assert_eq!(restored.step, FlowStep::Guest);
    }

    #[test]
    fn malformed_dates_dropped() {
        let restored = decode("checkIn=not-a-date&checkOut=2025-07-05");
        assert_eq!(restored.range.check_in, None);
        assert_eq!(restored.range.check_out, d("2025-07-05"));
    }

    #[test]
    fn inverted_range_keeps_check_in_only() {
        let restored = decode("checkIn=2025-07-05&checkOut=2025-07-01");
        assert_eq!(restored.range.check_in, d("2025-07-05"));
        assert_eq!(restored.range.check_out, None);
    }

    #[test]
    fn counts_clamped() {
        let restored = decode("adults=12&children=-3&infants=2");
        assert_eq!(restored.guests.adults, 5);
        assert_eq!(restored.guests.children, 0);
        assert_eq!(restored.guests.infants, 2);
    }

    #[test]
    fn unknown_step_falls_back_to_plan() {
        assert_eq!(decode("step=payment").step, FlowStep::Plan);
        assert_eq!(decode("?step=guest").step, FlowStep::Guest);
        assert_eq!(decode("").step, FlowStep::Plan);
    }

    #[test]
    fn plan_step_not_serialized() {
        let qs = encode(DateRange::default(), GuestCounts::default(), FlowStep::Plan);
        assert!(!qs.contains("step"));
    }
}
