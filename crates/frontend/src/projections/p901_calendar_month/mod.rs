//! PMS month calendar: day grid, booking capsules, blocked ranges.

mod view;
mod view_model;

pub use view::CalendarPage;
pub use view_model::CalendarViewModel;
