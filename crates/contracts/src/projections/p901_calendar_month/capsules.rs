//! Capsule layout for the PMS month grid.
//!
//! Capsules are derived, never persisted: one per booking intersecting the
//! displayed month, recomputed whenever the month or the fetched calendar
//! data changes. All arithmetic lives here so the grid component stays a dumb
//! renderer.

use super::dto::{BookingSummary, CalendarDay};
use chrono::{Datelike, NaiveDate};

/// Fixed display palette, cycled in discovery order. Cosmetic only; a
/// booking's color is not a stable identity across refetches.
pub const CAPSULE_PALETTE: [&str; 4] = ["#2563eb", "#059669", "#d97706", "#7c3aed"];

/// Fraction of a day cell left empty on each end so capsules float within
/// their cells instead of touching the edges.
const CAPSULE_INSET: f64 = 0.4;

const GRID_COLS: u32 = 7;

/// Visual span of one booking within the displayed month.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingCapsule {
    pub booking: BookingSummary,
    /// First shown day of month, clipped to the month start.
    pub start_day: u32,
    /// Last shown day of month, clipped to the month end.
    pub end_day: u32,
    /// Real stay length, not the clipped span.
    pub nights: i64,
    /// Calendar grid row (week) the clipped start falls in.
    pub row: u32,
    /// Column of the clipped start, Monday = 0.
    pub col: u32,
    /// Days covered in the capsule's row. A span crossing into the next week
    /// row is truncated at the row boundary; only the first-row segment is
    /// rendered.
    pub span: u32,
    pub color: &'static str,
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (next, NaiveDate::from_ymd_opt(year, month, 1)) {
        (Some(next), Some(first)) => (next - first).num_days() as u32,
        _ => 30,
    }
}

/// Distinct bookings referenced by the fetched month, in discovery order.
/// Discovery order drives the color cycle.
pub fn collect_month_bookings(days: &[CalendarDay]) -> Vec<BookingSummary> {
    let mut seen: Vec<BookingSummary> = Vec::new();
    for day in days {
        if let Some(booking) = &day.booking {
            if !seen.iter().any(|b| b.id == booking.id) {
                seen.push(booking.clone());
            }
        }
    }
    seen
}

/// Compute capsules for every booking whose stay interval intersects the
/// displayed month. This is a viewport clip, not a data filter: a booking
/// that started last month shows from day 1, one ending next month shows
/// through month-end.
pub fn layout_capsules(
    bookings: &[BookingSummary],
    year: i32,
    month: u32,
) -> Vec<BookingCapsule> {
    let Some(month_start) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let last_day = days_in_month(year, month);
    let Some(month_end) = NaiveDate::from_ymd_opt(year, month, last_day) else {
        return Vec::new();
    };
    // Monday-first grid.
    let first_weekday = month_start.weekday().num_days_from_monday();

    let mut capsules = Vec::new();
    for booking in bookings {
        // Stay interval [check_in, check_out]; check-out day itself is shown.
        if booking.check_out < month_start || booking.check_in > month_end {
            continue;
        }

        let start_day = if booking.check_in < month_start {
            1
        } else {
            booking.check_in.day()
        };
        let end_day = if booking.check_out > month_end {
            last_day
        } else {
            booking.check_out.day()
        };

        let cell = first_weekday + start_day - 1;
        let row = cell / GRID_COLS;
        let col = cell % GRID_COLS;
        let span = (end_day - start_day + 1).min(GRID_COLS - col);

        capsules.push(BookingCapsule {
            booking: booking.clone(),
            start_day,
            end_day,
            nights: (booking.check_out - booking.check_in).num_days(),
            row,
            col,
            span,
            color: CAPSULE_PALETTE[capsules.len() % CAPSULE_PALETTE.len()],
        });
    }
    capsules
}

/// Horizontal geometry of a capsule as CSS percentages of the row width,
/// with a 40% inset on each end.
pub fn capsule_geometry(col: u32, span: u32) -> (f64, f64) {
    let cols = GRID_COLS as f64;
    let left = (col as f64 + CAPSULE_INSET) / cols * 100.0;
    let width = (span as f64 - 2.0 * CAPSULE_INSET) / cols * 100.0;
    (left, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::b001_booking::status::BookingStatus;

    fn booking(id: &str, check_in: (i32, u32, u32), check_out: (i32, u32, u32)) -> BookingSummary {
        BookingSummary {
            id: id.into(),
            booking_id: format!("BK-{id}"),
            guest_name: "Guest".into(),
            check_in: NaiveDate::from_ymd_opt(check_in.0, check_in.1, check_in.2).unwrap(),
            check_out: NaiveDate::from_ymd_opt(check_out.0, check_out.1, check_out.2).unwrap(),
            status: BookingStatus::Confirmed,
            number_of_guests: 2,
        }
    }

    #[test]
    fn clips_to_month_start() {
        // Jan 28 – Feb 3 viewed in February: shows from day 1, nights stay 6.
        let capsules = layout_capsules(&[booking("1", (2025, 1, 28), (2025, 2, 3))], 2025, 2);
        assert_eq!(capsules.len(), 1);
        assert_eq!(capsules[0].start_day, 1);
        assert_eq!(capsules[0].end_day, 3);
        assert_eq!(capsules[0].nights, 6);
    }

    #[test]
    fn clips_to_month_end() {
        let capsules = layout_capsules(&[booking("1", (2025, 4, 28), (2025, 5, 2))], 2025, 4);
        assert_eq!(capsules[0].start_day, 28);
        assert_eq!(capsules[0].end_day, 30);
    }

    #[test]
    fn excludes_bookings_outside_month() {
        let capsules = layout_capsules(&[booking("1", (2025, 3, 1), (2025, 3, 5))], 2025, 5);
        assert!(capsules.is_empty());
    }

    #[test]
    fn row_follows_check_in_week() {
        // June 2025 starts on a Sunday (offset 6, Monday-first).
        let capsules = layout_capsules(&[booking("1", (2025, 6, 9), (2025, 6, 12))], 2025, 6);
        // Cell index 6 + 9 - 1 = 14 -> row 2, col 0.
        assert_eq!(capsules[0].row, 2);
        assert_eq!(capsules[0].col, 0);
        assert_eq!(capsules[0].span, 4);
    }

    #[test]
    fn span_truncated_at_row_boundary() {
        // June 13 2025 is a Friday (col 4); a 6-day span only keeps the
        // first-row segment of 3 cells.
        let capsules = layout_capsules(&[booking("1", (2025, 6, 13), (2025, 6, 18))], 2025, 6);
        assert_eq!(capsules[0].col, 4);
        assert_eq!(capsules[0].span, 3);
        assert_eq!(capsules[0].end_day, 18);
    }

    #[test]
    fn palette_cycles_in_discovery_order() {
        let bookings: Vec<_> = (0..5)
            .map(|i| booking(&i.to_string(), (2025, 6, 2 + i), (2025, 6, 3 + i)))
            .collect();
        let capsules = layout_capsules(&bookings, 2025, 6);
        assert_eq!(capsules[0].color, CAPSULE_PALETTE[0]);
        assert_eq!(capsules[3].color, CAPSULE_PALETTE[3]);
        assert_eq!(capsules[4].color, CAPSULE_PALETTE[0]);
    }

    #[test]
    fn geometry_has_forty_percent_inset() {
        let (left, width) = capsule_geometry(0, 1);
        assert!((left - (0.4 / 7.0 * 100.0)).abs() < 1e-9);
        assert!((width - (0.2 / 7.0 * 100.0)).abs() < 1e-9);

        let (left, width) = capsule_geometry(2, 3);
        assert!((left - (2.4 / 7.0 * 100.0)).abs() < 1e-9);
        assert!((width - (2.2 / 7.0 * 100.0)).abs() < 1e-9);
    }

    #[test]
    fn collect_dedupes_preserving_order() {
        use crate::projections::p901_calendar_month::dto::{CalendarDay, DayStatus};
        let a = booking("a", (2025, 6, 2), (2025, 6, 4));
        let b = booking("b", (2025, 6, 4), (2025, 6, 6));
        let days = vec![
            CalendarDay {
                date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
                status: DayStatus::CheckIn,
                booking: Some(a.clone()),
                blocked: None,
            },
            CalendarDay {
                date: NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
                status: DayStatus::Booked,
                booking: Some(a.clone()),
                blocked: None,
            },
            CalendarDay {
                date: NaiveDate::from_ymd_opt(2025, 6, 4).unwrap(),
                status: DayStatus::CheckIn,
                booking: Some(b.clone()),
                blocked: None,
            },
        ];
        let bookings = collect_month_bookings(&days);
        assert_eq!(bookings.len(), 2);
        assert_eq!(bookings[0].id, "a");
        assert_eq!(bookings[1].id, "b");
    }
}
