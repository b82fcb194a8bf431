//! API DTOs (Data Transfer Objects)

use serde::Serialize;

/// Order frame form data
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFrameResponse {
    pub address: Option<String>,
}
