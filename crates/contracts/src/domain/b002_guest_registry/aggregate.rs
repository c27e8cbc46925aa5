use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Registered occupant (guest document registration)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    #[default]
    Passport,
    IdentityCard,
    DrivingLicense,
}

impl DocumentType {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Passport => "Passport",
            DocumentType::IdentityCard => "Identity card",
            DocumentType::DrivingLicense => "Driving license",
        }
    }
}

/// A per-stay registered occupant, as stored by the API under
/// `/api/bookings/{id}/guests`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingGuest {
    pub id: String,
    pub booking_id: String,

    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    /// ISO 3166-1 alpha-2 country of citizenship.
    pub nationality: String,
    pub birth_country: String,
    #[serde(default)]
    pub birth_province: String,
    #[serde(default)]
    pub birth_city: String,

    pub document_type: DocumentType,
    pub document_number: String,
    /// Country that issued the document.
    pub document_issue_country: String,
    #[serde(default)]
    pub document_issue_province: String,
    #[serde(default)]
    pub document_issue_city: String,
    pub document_issue_date: Option<NaiveDate>,
    pub document_expiry_date: Option<NaiveDate>,
}

/// Form copy for the registration sub-flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BookingGuestDto {
    pub id: Option<String>,

    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub nationality: String,
    pub birth_country: String,
    pub birth_province: String,
    pub birth_city: String,

    pub document_type: DocumentType,
    pub document_number: String,
    pub document_issue_country: String,
    pub document_issue_province: String,
    pub document_issue_city: String,
    pub document_issue_date: Option<NaiveDate>,
    pub document_expiry_date: Option<NaiveDate>,
}

impl From<BookingGuest> for BookingGuestDto {
    fn from(g: BookingGuest) -> Self {
        Self {
            id: Some(g.id),
            first_name: g.first_name,
            last_name: g.last_name,
            date_of_birth: Some(g.date_of_birth),
            nationality: g.nationality,
            birth_country: g.birth_country,
            birth_province: g.birth_province,
            birth_city: g.birth_city,
            document_type: g.document_type,
            document_number: g.document_number,
            document_issue_country: g.document_issue_country,
            document_issue_province: g.document_issue_province,
            document_issue_city: g.document_issue_city,
            document_issue_date: g.document_issue_date,
            document_expiry_date: g.document_expiry_date,
        }
    }
}

fn is_italy(country: &str) -> bool {
    let c = country.trim();
    c.eq_ignore_ascii_case("IT") || c.eq_ignore_ascii_case("ITA") || c.eq_ignore_ascii_case("Italy")
}

impl BookingGuestDto {
    /// Field-level validation for guest registration.
    ///
    /// Italian public-security reporting needs the birth province/city for
    /// guests born in Italy and the issue province/city for Italian-issued
    /// documents; for any other country those fields stay optional.
    pub fn validate(&self) -> Result<(), String> {
        if self.first_name.trim().is_empty() {
            return Err("First name is required".into());
        }
        if self.last_name.trim().is_empty() {
            return Err("Last name is required".into());
        }
        if self.date_of_birth.is_none() {
            return Err("Date of birth is required".into());
        }
        if self.nationality.trim().is_empty() {
            return Err("Nationality is required".into());
        }
        if self.birth_country.trim().is_empty() {
            return Err("Birth country is required".into());
        }
        if is_italy(&self.birth_country) {
            if self.birth_province.trim().is_empty() {
                return Err("Birth province is required for guests born in Italy".into());
            }
            if self.birth_city.trim().is_empty() {
                return Err("Birth city is required for guests born in Italy".into());
            }
        }

        if self.document_number.trim().is_empty() {
            return Err("Document number is required".into());
        }
        if self.document_issue_country.trim().is_empty() {
            return Err("Document issue country is required".into());
        }
        if is_italy(&self.document_issue_country) {
            if self.document_issue_province.trim().is_empty() {
                return Err("Issue province is required for Italian documents".into());
            }
            if self.document_issue_city.trim().is_empty() {
                return Err("Issue city is required for Italian documents".into());
            }
        }

        if let (Some(issued), Some(expiry)) = (self.document_issue_date, self.document_expiry_date)
        {
            if expiry <= issued {
                return Err("Document expiry must be after its issue date".into());
            }
        }

        Ok(())
    }
}

// ============================================================================
// Registration progress
// ============================================================================

/// Registered-vs-expected occupant count. Both mismatch directions are
/// warnings the staff can act on, never hard errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationProgress {
    Under { registered: u32, expected: u32 },
    Complete { registered: u32 },
    Over { registered: u32, expected: u32 },
}

impl RegistrationProgress {
    pub fn compute(registered: u32, expected: u32) -> Self {
        if registered < expected {
            RegistrationProgress::Under {
                registered,
                expected,
            }
        } else if registered == expected {
            RegistrationProgress::Complete { registered }
        } else {
            RegistrationProgress::Over {
                registered,
                expected,
            }
        }
    }

    pub fn message(&self) -> Option<String> {
        match self {
            RegistrationProgress::Under {
                registered,
                expected,
            } => Some(format!(
                "{} of {} guests registered — registration incomplete",
                registered, expected
            )),
            RegistrationProgress::Complete { .. } => None,
            RegistrationProgress::Over {
                registered,
                expected,
            } => Some(format!(
                "{} guests registered but only {} expected — check the booking",
                registered, expected
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_guest() -> BookingGuestDto {
        BookingGuestDto {
            first_name: "Marta".into(),
            last_name: "Bianchi".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 12),
            nationality: "IT".into(),
            birth_country: "FR".into(),
            document_type: DocumentType::Passport,
            document_number: "X123456".into(),
            document_issue_country: "FR".into(),
            document_issue_date: NaiveDate::from_ymd_opt(2020, 1, 1),
            document_expiry_date: NaiveDate::from_ymd_opt(2030, 1, 1),
            ..Default::default()
        }
    }

    #[test]
    fn italian_birth_needs_province_and_city() {
        let mut guest = valid_guest();
        guest.birth_country = "IT".into();
        assert!(guest.validate().is_err());

        guest.birth_province = "SA".into();
        guest.birth_city = "Amalfi".into();
        assert!(guest.validate().is_ok());
    }

    #[test]
    fn italian_document_needs_issue_place() {
        let mut guest = valid_guest();
        guest.document_issue_country = "Italy".into();
        assert!(guest.validate().is_err());

        guest.document_issue_province = "NA".into();
        guest.document_issue_city = "Napoli".into();
        assert!(guest.validate().is_ok());
    }

    #[test]
    fn foreign_guest_skips_conditional_fields() {
        assert!(valid_guest().validate().is_ok());
    }

    #[test]
    fn expiry_must_follow_issue() {
        let mut guest = valid_guest();
        guest.document_expiry_date = guest.document_issue_date;
        assert!(guest.validate().is_err());
    }

    #[test]
    fn progress_states() {
        assert_eq!(
            RegistrationProgress::compute(1, 3),
            RegistrationProgress::Under {
                registered: 1,
                expected: 3
            }
        );
        assert_eq!(
            RegistrationProgress::compute(3, 3),
            RegistrationProgress::Complete { registered: 3 }
        );
        assert!(RegistrationProgress::compute(4, 3).message().is_some());
        assert!(RegistrationProgress::compute(3, 3).message().is_none());
    }
}
