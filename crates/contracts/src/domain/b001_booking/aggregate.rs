use super::guest_counts::{DateRange, GuestCounts, MAX_OCCUPANCY};
use super::status::BookingStatus;
use crate::projections::p900_price_quote::dto::CancellationPolicy;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Payment status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    DepositPaid,
    Paid,
    Refunded,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "Unpaid",
            PaymentStatus::DepositPaid => "Deposit paid",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Refunded => "Refunded",
        }
    }
}

// ============================================================================
// Server entity
// ============================================================================

/// A booking as the API returns it. Owned by the server; the frontend only
/// ever holds a transient copy while a form is open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    /// Human-readable code staff quote to guests (e.g. "BK-2025-0142").
    pub booking_id: String,

    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,

    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
    pub number_of_guests: u32,

    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub cancellation_policy: CancellationPolicy,

    // Server-computed pricing, decimal-as-string.
    pub nightly_rate: String,
    pub cleaning_fee: String,
    pub tourist_tax: String,
    pub total_amount: String,
    /// Outstanding balance right after creation / after payments.
    pub amount_due: String,

    // Staff-entered replacement pricing (see `manual_pricing`).
    #[serde(default)]
    pub manual_pricing: bool,
    #[serde(default)]
    pub manual_nightly_rate: String,
    #[serde(default)]
    pub manual_cleaning_fee: String,
    #[serde(default)]
    pub manual_tourist_tax: String,
    #[serde(default)]
    pub manual_total: String,

    #[serde(default)]
    pub special_requests: String,
    #[serde(default)]
    pub notes: String,

    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Booking {
    pub fn guest_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn date_range(&self) -> DateRange {
        DateRange::new(Some(self.check_in), Some(self.check_out))
    }

    pub fn outstanding_balance(&self) -> f64 {
        crate::shared::money::parse_amount_or_zero(&self.amount_due)
    }
}

// ============================================================================
// Form DTO
// ============================================================================

/// Mutable form copy of a booking, diffed against a pristine snapshot to
/// detect unsaved changes (plain `PartialEq` over all fields).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BookingDto {
    pub id: Option<String>,
    pub booking_id: Option<String>,

    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,

    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
    pub number_of_guests: u32,

    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub cancellation_policy: CancellationPolicy,

    pub nightly_rate: String,
    pub cleaning_fee: String,
    pub tourist_tax: String,
    pub total_amount: String,
    pub amount_due: String,

    pub manual_pricing: bool,
    pub manual_nightly_rate: String,
    pub manual_cleaning_fee: String,
    pub manual_tourist_tax: String,
    pub manual_total: String,

    pub special_requests: String,
    pub notes: String,
}

impl From<Booking> for BookingDto {
    fn from(b: Booking) -> Self {
        Self {
            id: Some(b.id),
            booking_id: Some(b.booking_id),
            first_name: b.first_name,
            last_name: b.last_name,
            email: b.email,
            phone: b.phone,
            country: b.country,
            check_in: Some(b.check_in),
            check_out: Some(b.check_out),
            adults: b.adults,
            children: b.children,
            infants: b.infants,
            number_of_guests: b.number_of_guests,
            status: b.status,
            payment_status: b.payment_status,
            cancellation_policy: b.cancellation_policy,
            nightly_rate: b.nightly_rate,
            cleaning_fee: b.cleaning_fee,
            tourist_tax: b.tourist_tax,
            total_amount: b.total_amount,
            amount_due: b.amount_due,
            manual_pricing: b.manual_pricing,
            manual_nightly_rate: b.manual_nightly_rate,
            manual_cleaning_fee: b.manual_cleaning_fee,
            manual_tourist_tax: b.manual_tourist_tax,
            manual_total: b.manual_total,
            special_requests: b.special_requests,
            notes: b.notes,
        }
    }
}

impl BookingDto {
    pub fn new_for_create() -> Self {
        Self {
            adults: 1,
            number_of_guests: 1,
            ..Self::default()
        }
    }

    pub fn guest_counts(&self) -> GuestCounts {
        GuestCounts {
            adults: self.adults,
            children: self.children,
            infants: self.infants,
        }
    }

    /// Editing a breakdown field always overwrites the aggregate; there is no
    /// independent entry of `number_of_guests`.
    pub fn set_guest_counts(&mut self, counts: GuestCounts) {
        self.adults = counts.adults;
        self.children = counts.children;
        self.infants = counts.infants;
        self.number_of_guests = counts.total();
    }

    pub fn date_range(&self) -> DateRange {
        DateRange::new(self.check_in, self.check_out)
    }

    /// Local validation before any network call.
    pub fn validate(&self) -> Result<(), String> {
        if self.first_name.trim().is_empty() {
            return Err("First name is required".into());
        }
        if self.last_name.trim().is_empty() {
            return Err("Last name is required".into());
        }
        if self.email.trim().is_empty() {
            return Err("Email is required".into());
        }
        if self.phone.trim().is_empty() {
            return Err("Phone is required".into());
        }
        if self.country.trim().is_empty() {
            return Err("Country is required".into());
        }
        if !self.date_range().is_valid() {
            return Err("Check-out must be after check-in".into());
        }
        if self.adults < 1 {
            return Err("At least one adult is required".into());
        }
        if self.adults + self.children > MAX_OCCUPANCY {
            return Err(format!(
                "At most {} guests (adults + children) can stay",
                MAX_OCCUPANCY
            ));
        }
        Ok(())
    }

    /// Payload actually submitted to the API.
    ///
    /// With the override toggle off, the manual figures are dropped from the
    /// payload; they are only removed from server state when saved that way.
    pub fn submit_payload(&self) -> BookingDto {
        let mut payload = self.clone();
        if !payload.manual_pricing {
            payload.manual_nightly_rate = String::new();
            payload.manual_cleaning_fee = String::new();
            payload.manual_tourist_tax = String::new();
            payload.manual_total = String::new();
        }
        payload
    }
}

// ============================================================================
// Create request (guest booking flow)
// ============================================================================

/// Free-form extra guest row entered on the guest-info step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ExtraGuestDetail {
    pub name: String,
    #[serde(default)]
    pub age: Option<u32>,
}

/// Payload for `POST /api/bookings` from the public booking flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
    pub number_of_guests: u32,

    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub special_requests: String,
    pub extra_guests: Vec<ExtraGuestDetail>,

    pub cancellation_policy: CancellationPolicy,
    pub applied_credit: String,

    pub nightly_rate: String,
    pub cleaning_fee: String,
    pub tourist_tax: String,
    pub total_amount: String,

    /// Client-generated idempotency key so a retry after a network error does
    /// not create a duplicate booking.
    pub client_request_id: String,
}

/// Response of `POST /api/bookings/check-availability`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub available: bool,
}

/// Response of checkout-session creation; `session_url` is a redirect target
/// hosted by the payment provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub session_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::b001_booking::guest_counts::GuestField;

    fn valid_dto() -> BookingDto {
        let mut dto = BookingDto::new_for_create();
        dto.first_name = "Ada".into();
        dto.last_name = "Rossi".into();
        dto.email = "ada@example.com".into();
        dto.phone = "+39 333 0000000".into();
        dto.country = "IT".into();
        dto.check_in = NaiveDate::from_ymd_opt(2025, 7, 1);
        dto.check_out = NaiveDate::from_ymd_opt(2025, 7, 5);
        dto
    }

    #[test]
    fn guest_breakdown_sync() {
        let mut dto = valid_dto();
        dto.set_guest_counts(GuestCounts::new(2, 1, 0));
        assert_eq!(dto.number_of_guests, 3);

        dto.set_guest_counts(dto.guest_counts().increment(GuestField::Infants));
        assert_eq!(dto.number_of_guests, 4);
        assert_eq!(dto.adults, 2);
    }

    #[test]
    fn validate_requires_contact_fields() {
        for blank in ["first_name", "last_name", "email", "phone", "country"] {
            let mut dto = valid_dto();
            match blank {
                "first_name" => dto.first_name = "  ".into(),
                "last_name" => dto.last_name = String::new(),
                "email" => dto.email = " ".into(),
                "phone" => dto.phone = String::new(),
                _ => dto.country = String::new(),
            }
            assert!(dto.validate().is_err(), "expected {blank} to be required");
        }
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn validate_requires_date_order() {
        let mut dto = valid_dto();
        dto.check_out = dto.check_in;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn manual_overrides_dropped_when_toggle_off() {
        let mut dto = valid_dto();
        dto.manual_nightly_rate = "99.00".into();
        dto.manual_total = "500.00".into();

        let payload = dto.submit_payload();
        assert!(payload.manual_nightly_rate.is_empty());
        assert!(payload.manual_total.is_empty());

        dto.manual_pricing = true;
        let payload = dto.submit_payload();
        assert_eq!(payload.manual_nightly_rate, "99.00");
    }
}
