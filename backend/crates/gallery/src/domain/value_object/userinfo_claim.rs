//! Userinfo Claim Value Object

use serde::Serialize;

/// A `(type, value)` pair returned by the userinfo endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserInfoClaim {
    #[serde(rename = "type")]
    pub claim_type: String,
    pub value: String,
}

impl UserInfoClaim {
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
        }
    }

    /// Flatten a userinfo JSON object into claims.
    ///
    /// Arrays become one claim per element; strings are taken as-is and any
    /// other JSON value keeps its JSON text.
    pub fn from_json_object(object: serde_json::Map<String, serde_json::Value>) -> Vec<Self> {
        let mut claims = Vec::with_capacity(object.len());
        for (claim_type, value) in object {
            match value {
                serde_json::Value::Array(items) => {
                    claims.extend(items.into_iter().map(|item| Self::from_value(&claim_type, item)));
                }
                other => claims.push(Self::from_value(&claim_type, other)),
            }
        }
        claims
    }

    fn from_value(claim_type: &str, value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => Self::new(claim_type, s),
            other => Self::new(claim_type, other.to_string()),
        }
    }
}
