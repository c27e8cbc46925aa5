pub mod date_range_picker;
pub mod guest_counter;
pub mod ui;

pub use date_range_picker::DateRangePicker;
pub use guest_counter::GuestCounter;
