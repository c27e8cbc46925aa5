pub mod b001_booking;
pub mod b002_guest_registry;
pub mod b003_blocked_date;
