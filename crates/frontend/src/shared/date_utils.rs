/// Utilities for date formatting and month arithmetic shared by the booking
/// flow and the PMS calendar.
use chrono::{Datelike, NaiveDate};

/// Parse a yyyy-mm-dd string as the date inputs and query parameters carry it.
/// Malformed input yields `None` (silently dropped upstream).
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Format for date inputs and the API: yyyy-mm-dd.
pub fn to_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Human format for labels: "Fri 13 Jun 2025".
pub fn format_human(date: NaiveDate) -> String {
    date.format("%a %d %b %Y").to_string()
}

/// "June 2025" month heading.
pub fn month_title(year: i32, month: u32) -> String {
    let name = match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    };
    format!("{} {}", name, year)
}

/// Previous month as (year, month).
pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Next month as (year, month).
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (ny, nm) = next_month(year, month);
    match (
        NaiveDate::from_ymd_opt(ny, nm, 1),
        NaiveDate::from_ymd_opt(year, month, 1),
    ) {
        (Some(next), Some(first)) => (next - first).num_days() as u32,
        _ => 30,
    }
}

/// Monday-first weekday offset of the month's first day.
pub fn first_weekday_offset(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_monday())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(
            parse_iso_date("2025-06-13"),
            NaiveDate::from_ymd_opt(2025, 6, 13)
        );
        assert_eq!(parse_iso_date(" 2025-06-13 "), parse_iso_date("2025-06-13"));
        assert_eq!(parse_iso_date("13/06/2025"), None);
        assert_eq!(parse_iso_date(""), None);
        assert_eq!(parse_iso_date("2025-13-45"), None);
    }

    #[test]
    fn test_month_arithmetic() {
        assert_eq!(prev_month(2025, 1), (2024, 12));
        assert_eq!(next_month(2025, 12), (2026, 1));
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 6), 30);
    }

    #[test]
    fn test_first_weekday_offset() {
        // June 2025 starts on a Sunday.
        assert_eq!(first_weekday_offset(2025, 6), 6);
        // September 2025 starts on a Monday.
        assert_eq!(first_weekday_offset(2025, 9), 0);
    }

    #[test]
    fn test_month_title() {
        assert_eq!(month_title(2025, 6), "June 2025");
    }
}
