pub mod dto;

pub use dto::ReferralCredits;
