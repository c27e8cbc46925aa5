pub mod aggregate;
pub mod guest_counts;
pub mod status;

pub use aggregate::{
    AvailabilityResponse, Booking, BookingDto, CheckoutSession, CreateBookingRequest,
    ExtraGuestDetail, PaymentStatus,
};
pub use guest_counts::{DateRange, GuestCounts, GuestField, MAX_OCCUPANCY};
pub use status::{BookingStatus, StatusAction, TransitionCtx, TransitionError};
