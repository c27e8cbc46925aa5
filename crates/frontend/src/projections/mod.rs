pub mod p901_calendar_month;
pub mod p902_referral_credits;
