pub mod derive;
pub mod dto;

pub use derive::derive_display_pricing;
pub use dto::{CancellationPolicy, DisplayPricing, PriceQuote};
