//! Public marketing pages: the property landing page and the post-payment
//! confirmation page.

pub mod api;
mod confirmation;
mod home;

pub use confirmation::ConfirmationPage;
pub use home::HomePage;
