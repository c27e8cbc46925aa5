//! Booking side panel of the PMS calendar.
//!
//! One panel, three modes: read-only `View`, `Edit` over a pristine
//! snapshot, and `Create` for walk-in/phone bookings.

mod view;
mod view_model;

pub use view::BookingSidePanel;
pub use view_model::{BookingSidePanelViewModel, PanelMode};
