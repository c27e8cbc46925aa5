use crate::shared::money;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Status
// ============================================================================

/// Lifecycle status of a booking as stored by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Paid,
    CheckedIn,
    CheckedOut,
    Cancelled,
    NoShow,
}

impl BookingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Paid => "Paid",
            BookingStatus::CheckedIn => "Checked in",
            BookingStatus::CheckedOut => "Checked out",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::NoShow => "No-show",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Actions & transition table
// ============================================================================

/// Explicit staff actions on a booking's status.
///
/// The status field is never edited free-form once a booking exists; every
/// change goes through `BookingStatus::apply`, so an illegal transition is
/// unrepresentable instead of an ad-hoc boolean check scattered per button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusAction {
    CheckIn,
    CheckOut,
    UndoCheckIn,
    Cancel,
    MarkNoShow,
    Reinstate,
}

impl StatusAction {
    pub fn label(&self) -> &'static str {
        match self {
            StatusAction::CheckIn => "Check in",
            StatusAction::CheckOut => "Check out",
            StatusAction::UndoCheckIn => "Undo check-in",
            StatusAction::Cancel => "Cancel booking",
            StatusAction::MarkNoShow => "Mark no-show",
            StatusAction::Reinstate => "Reinstate",
        }
    }

    const ALL: [StatusAction; 6] = [
        StatusAction::CheckIn,
        StatusAction::CheckOut,
        StatusAction::UndoCheckIn,
        StatusAction::Cancel,
        StatusAction::MarkNoShow,
        StatusAction::Reinstate,
    ];
}

/// Guard inputs for a transition.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransitionCtx {
    /// Balance still owed on the booking, in currency units.
    pub outstanding_balance: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransitionError {
    IllegalTransition {
        from: BookingStatus,
        action: StatusAction,
    },
    OutstandingBalance {
        amount: f64,
    },
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionError::IllegalTransition { from, action } => {
                write!(f, "\"{}\" is not allowed from status {}", action.label(), from)
            }
            TransitionError::OutstandingBalance { amount } => {
                write!(
                    f,
                    "Cannot check out with an outstanding balance of {}",
                    money::format_amount(*amount)
                )
            }
        }
    }
}

impl BookingStatus {
    /// The transition table. `None` means the action is illegal from `self`.
    fn target(self, action: StatusAction) -> Option<BookingStatus> {
        use BookingStatus::*;
        use StatusAction::*;
        match (self, action) {
            (Pending | Confirmed | Paid, CheckIn) => Some(CheckedIn),
            (CheckedIn, CheckOut) => Some(CheckedOut),
            (CheckedIn, UndoCheckIn) => Some(Confirmed),
            (Pending | Confirmed | Paid, Cancel) => Some(Cancelled),
            (Pending | Confirmed | Paid, MarkNoShow) => Some(NoShow),
            (Cancelled | NoShow, Reinstate) => Some(Confirmed),
            _ => None,
        }
    }

    /// Apply a staff action, enforcing both the table and the guards.
    ///
    /// Check-out is refused while the booking still owes money.
    pub fn apply(
        self,
        action: StatusAction,
        ctx: TransitionCtx,
    ) -> Result<BookingStatus, TransitionError> {
        let next = self
            .target(action)
            .ok_or(TransitionError::IllegalTransition { from: self, action })?;

        if action == StatusAction::CheckOut && !money::is_settled(ctx.outstanding_balance) {
            return Err(TransitionError::OutstandingBalance {
                amount: ctx.outstanding_balance,
            });
        }

        Ok(next)
    }

    /// Actions that would succeed from this status under `ctx`.
    pub fn available_actions(self, ctx: TransitionCtx) -> Vec<StatusAction> {
        StatusAction::ALL
            .into_iter()
            .filter(|action| self.apply(*action, ctx).is_ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use BookingStatus::*;
    use StatusAction::*;

    fn settled() -> TransitionCtx {
        TransitionCtx {
            outstanding_balance: 0.0,
        }
    }

    #[test]
    fn forward_path() {
        assert_eq!(Pending.apply(CheckIn, settled()), Ok(CheckedIn));
        assert_eq!(Confirmed.apply(CheckIn, settled()), Ok(CheckedIn));
        assert_eq!(Paid.apply(CheckIn, settled()), Ok(CheckedIn));
        assert_eq!(CheckedIn.apply(CheckOut, settled()), Ok(CheckedOut));
    }

    #[test]
    fn undo_and_reinstate() {
        assert_eq!(CheckedIn.apply(UndoCheckIn, settled()), Ok(Confirmed));
        assert_eq!(Cancelled.apply(Reinstate, settled()), Ok(Confirmed));
        assert_eq!(NoShow.apply(Reinstate, settled()), Ok(Confirmed));
    }

    #[test]
    fn checkout_blocked_by_balance() {
        let owing = TransitionCtx {
            outstanding_balance: 120.0,
        };
        assert_eq!(
            CheckedIn.apply(CheckOut, owing),
            Err(TransitionError::OutstandingBalance { amount: 120.0 })
        );
        // A negligible residue does not block.
        let residue = TransitionCtx {
            outstanding_balance: 0.01,
        };
        assert_eq!(CheckedIn.apply(CheckOut, residue), Ok(CheckedOut));
    }

    #[test]
    fn cancellation_blocked_after_arrival() {
        for from in [CheckedIn, CheckedOut, Cancelled, NoShow] {
            assert!(matches!(
                from.apply(Cancel, settled()),
                Err(TransitionError::IllegalTransition { .. })
            ));
        }
    }

    #[test]
    fn no_show_only_before_arrival() {
        assert_eq!(Confirmed.apply(MarkNoShow, settled()), Ok(NoShow));
        assert!(CheckedOut.apply(MarkNoShow, settled()).is_err());
    }

    #[test]
    fn available_actions_respect_guards() {
        let owing = TransitionCtx {
            outstanding_balance: 50.0,
        };
        let actions = CheckedIn.available_actions(owing);
        assert!(!actions.contains(&CheckOut));
        assert!(actions.contains(&UndoCheckIn));

        let actions = CheckedIn.available_actions(settled());
        assert!(actions.contains(&CheckOut));
    }
}
