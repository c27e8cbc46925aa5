use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Guest counts
// ============================================================================

/// Hard cap on adults + children. Infants do not count toward occupancy.
pub const MAX_OCCUPANCY: u32 = 5;

const MAX_INFANTS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestField {
    Adults,
    Children,
    Infants,
}

/// Guest breakdown for a stay.
///
/// Mutated only through the clamped `set`/`increment`/`decrement` handlers;
/// an update that would break an invariant returns the previous value
/// unchanged so callers can assign the result unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestCounts {
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
}

impl Default for GuestCounts {
    fn default() -> Self {
        Self {
            adults: 1,
            children: 0,
            infants: 0,
        }
    }
}

impl GuestCounts {
    pub fn new(adults: u32, children: u32, infants: u32) -> Self {
        Self::default()
            .set(GuestField::Adults, adults as i64)
            .set(GuestField::Children, children as i64)
            .set(GuestField::Infants, infants as i64)
    }

    /// Everyone occupying the unit, infants included.
    pub fn total(&self) -> u32 {
        self.adults + self.children + self.infants
    }

    /// Occupancy counted against the cap (infants exempt).
    pub fn occupancy(&self) -> u32 {
        self.adults + self.children
    }

    fn is_valid(&self) -> bool {
        self.adults >= 1 && self.occupancy() <= MAX_OCCUPANCY && self.infants <= MAX_INFANTS
    }

    /// Direct entry with clamping. Negative input clamps to the field minimum;
    /// a value that would exceed the occupancy cap leaves the counts unchanged.
    pub fn set(self, field: GuestField, requested: i64) -> Self {
        let mut next = self;
        match field {
            GuestField::Adults => next.adults = requested.clamp(1, MAX_OCCUPANCY as i64) as u32,
            GuestField::Children => {
                next.children = requested.clamp(0, (MAX_OCCUPANCY - 1) as i64) as u32
            }
            GuestField::Infants => next.infants = requested.clamp(0, MAX_INFANTS as i64) as u32,
        }
        if next.is_valid() {
            next
        } else {
            self
        }
    }

    pub fn increment(self, field: GuestField) -> Self {
        let current = match field {
            GuestField::Adults => self.adults,
            GuestField::Children => self.children,
            GuestField::Infants => self.infants,
        };
        self.set(field, current as i64 + 1)
    }

    pub fn decrement(self, field: GuestField) -> Self {
        let current = match field {
            GuestField::Adults => self.adults,
            GuestField::Children => self.children,
            GuestField::Infants => self.infants,
        };
        self.set(field, current as i64 - 1)
    }
}

// ============================================================================
// Date range
// ============================================================================

/// Selected stay dates. Either endpoint may be unset mid-selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> Self {
        Self {
            check_in,
            check_out,
        }
    }

    /// Whole nights between check-in and check-out; 0 when unset or not
    /// strictly increasing.
    pub fn nights(&self) -> i64 {
        match (self.check_in, self.check_out) {
            (Some(ci), Some(co)) => (co - ci).num_days().max(0),
            _ => 0,
        }
    }

    /// Both dates set and check-out strictly after check-in.
    pub fn is_valid(&self) -> bool {
        match (self.check_in, self.check_out) {
            (Some(ci), Some(co)) => co > ci,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn cap_rejection_keeps_previous_state() {
        let counts = GuestCounts::new(3, 2, 0);
        // 3 + 2 is at the cap; any further increment is a no-op.
        assert_eq!(counts.increment(GuestField::Adults), counts);
        assert_eq!(counts.increment(GuestField::Children), counts);
        // Infants are exempt from the cap.
        assert_eq!(counts.increment(GuestField::Infants).infants, 1);
    }

    #[test]
    fn adults_never_below_one() {
        let counts = GuestCounts::default();
        assert_eq!(counts.decrement(GuestField::Adults).adults, 1);
        assert_eq!(counts.set(GuestField::Adults, -4).adults, 1);
    }

    #[test]
    fn direct_entry_clamps() {
        let counts = GuestCounts::default().set(GuestField::Adults, 99);
        assert_eq!(counts.adults, MAX_OCCUPANCY);
        let counts = GuestCounts::new(2, 0, 0).set(GuestField::Children, 99);
        // 2 adults leave room for 3 children at most; the raw clamp to 4 still
        // violates the cap, so the update is rejected outright.
        assert_eq!(counts.children, 0);
    }

    #[test]
    fn total_includes_infants() {
        let counts = GuestCounts::new(2, 1, 2);
        assert_eq!(counts.total(), 5);
        assert_eq!(counts.occupancy(), 3);
    }

    #[test]
    fn nights_require_strict_order() {
        let range = DateRange::new(Some(d("2025-06-10")), Some(d("2025-06-13")));
        assert_eq!(range.nights(), 3);
        assert!(range.is_valid());

        let inverted = DateRange::new(Some(d("2025-06-13")), Some(d("2025-06-10")));
        assert_eq!(inverted.nights(), 0);
        assert!(!inverted.is_valid());

        let same_day = DateRange::new(Some(d("2025-06-10")), Some(d("2025-06-10")));
        assert!(!same_day.is_valid());

        assert_eq!(DateRange::default().nights(), 0);
    }
}
