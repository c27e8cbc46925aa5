pub mod aggregate;

pub use aggregate::{BookingGuest, BookingGuestDto, DocumentType, RegistrationProgress};
