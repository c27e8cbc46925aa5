pub mod flow;
pub mod my_bookings;
pub mod side_panel;
