pub mod api_error;
pub mod money;
pub mod site;

pub use api_error::ErrorResponse;
