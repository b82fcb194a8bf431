//! API DTOs (Data Transfer Objects)

use serde::Serialize;

use crate::domain::value_object::claim::Claim;

/// Issued profile
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub subject: String,
    pub claims: Vec<Claim>,
}

/// Activity check
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveResponse {
    pub subject: String,
    pub is_active: bool,
}
