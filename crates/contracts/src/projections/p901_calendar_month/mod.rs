pub mod capsules;
pub mod dto;

pub use capsules::{capsule_geometry, collect_month_bookings, layout_capsules, BookingCapsule};
pub use dto::{BlockedSummary, BookingSummary, CalendarDay, DayStatus};
