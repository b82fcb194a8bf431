//! Claim Value Object
//!
//! A `(type, value)` pair as stored for a subject. Types may repeat with
//! different values (several `role` claims, for instance), so a subject's
//! claims are a multiset and are carried as a `Vec`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Claim {
    #[serde(rename = "type")]
    pub claim_type: String,
    pub value: String,
}

impl Claim {
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_serialization_uses_type_key() {
        let claim = Claim::new("role", "PayingUser");
        let json = serde_json::to_string(&claim).unwrap();
        assert_eq!(json, r#"{"type":"role","value":"PayingUser"}"#);
    }
}
