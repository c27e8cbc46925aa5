//! Two-step booking wizard (`plan` -> `guest`).
//!
//! - `url_state.rs`: pure query-string (de)serialization for deep links
//! - `view_model.rs`: flow state machine, pricing, submission
//! - `view.rs`: Leptos components (pure UI)

mod url_state;
mod view;
mod view_model;

use serde::{Deserialize, Serialize};

pub use view::BookingFlowPage;
pub use view_model::BookingFlowViewModel;

/// Wizard step. Forward only; "back" returns to `Plan` without clearing
/// anything the guest already entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowStep {
    #[default]
    Plan,
    Guest,
}
