pub mod aggregate;

pub use aggregate::{BlockReason, BlockedDate, BlockedDateDto};
