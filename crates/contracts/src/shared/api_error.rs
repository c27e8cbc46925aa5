use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Error body shape returned by the booking API.
///
/// Mutation endpoints return `field_errors` keyed by the offending field name
/// so forms can attach messages inline; `error` carries the human summary.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: String,

    #[serde(default, rename = "fieldErrors")]
    pub field_errors: HashMap<String, String>,
}
