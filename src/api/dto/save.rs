//! DTOs for the save endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Mapping;

/// Request to store a mapping.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// The target URL (must be a valid URL).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Optional alias; omitted or empty means one is generated.
    /// Upper bound matches `alias_generator::MAX_ALIAS_LENGTH`.
    #[validate(length(max = 64))]
    #[serde(default)]
    pub alias: Option<String>,
}

/// Stored mapping returned to the caller.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub id: i64,
    pub alias: String,
    pub url: String,
}

impl From<Mapping> for SaveResponse {
    fn from(mapping: Mapping) -> Self {
        Self {
            id: mapping.id,
            alias: mapping.alias,
            url: mapping.url,
        }
    }
}
