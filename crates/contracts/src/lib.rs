//! Shared contracts between the frontend and the remote booking API.
//!
//! Everything in this crate is plain data plus pure computation: wire DTOs,
//! the booking status transition table, price derivation and calendar capsule
//! layout. No browser or network dependencies, so the whole crate is testable
//! natively.

pub mod domain;
pub mod projections;
pub mod shared;
pub mod system;
