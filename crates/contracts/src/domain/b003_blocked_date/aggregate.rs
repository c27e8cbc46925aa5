use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BlockReason {
    #[default]
    Maintenance,
    OwnerUse,
    Other,
}

impl BlockReason {
    pub fn label(&self) -> &'static str {
        match self {
            BlockReason::Maintenance => "Maintenance",
            BlockReason::OwnerUse => "Owner use",
            BlockReason::Other => "Other",
        }
    }

    pub const ALL: [BlockReason; 3] = [
        BlockReason::Maintenance,
        BlockReason::OwnerUse,
        BlockReason::Other,
    ];
}

/// Calendar block created by staff (no booking involved).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockedDate {
    pub id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: BlockReason,
    #[serde(default)]
    pub notes: String,
}

/// Form payload for `POST /api/blocked-dates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BlockedDateDto {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub reason: BlockReason,
    pub notes: String,
}

impl BlockedDateDto {
    pub fn validate(&self) -> Result<(), String> {
        let (Some(start), Some(end)) = (self.start_date, self.end_date) else {
            return Err("Start and end dates are required".into());
        };
        if end < start {
            return Err("End date must not be before the start date".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_order() {
        let mut dto = BlockedDateDto {
            start_date: NaiveDate::from_ymd_opt(2025, 9, 10),
            end_date: NaiveDate::from_ymd_opt(2025, 9, 12),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());

        // A single-day block is allowed.
        dto.end_date = dto.start_date;
        assert!(dto.validate().is_ok());

        dto.end_date = NaiveDate::from_ymd_opt(2025, 9, 1);
        assert!(dto.validate().is_err());

        dto.end_date = None;
        assert!(dto.validate().is_err());
    }
}
