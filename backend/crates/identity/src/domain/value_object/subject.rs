//! Subject Value Object
//!
//! Opaque, stable identifier of a user; the primary key into the user store.
//! The identity provider never mints or mutates subjects, it only reads them.
//!
//! ## Usage
//! ```rust
//! use identity::domain::value_object::subject::Subject;
//!
//! let subject = Subject::parse_str("sub-42").unwrap();
//! assert_eq!(subject.as_str(), "sub-42");
//! assert!(Subject::parse_str("   ").is_err());
//! ```
use std::str::FromStr;

use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Maximum accepted subject length
pub const MAX_SUBJECT_LENGTH: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(transparent)]
pub struct Subject(String);

impl Subject {
    /// Parse a subject taken from a request or a token.
    ///
    /// The value is kept verbatim; only blank, oversized, or control-character
    /// input is rejected.
    pub fn parse_str(s: &str) -> AppResult<Self> {
        if s.trim().is_empty() {
            return Err(AppError::bad_request("Subject must not be blank"));
        }
        if s.len() > MAX_SUBJECT_LENGTH {
            return Err(AppError::bad_request(format!(
                "Subject exceeds {MAX_SUBJECT_LENGTH} bytes"
            )));
        }
        if s.chars().any(char::is_control) {
            return Err(AppError::bad_request("Subject contains control characters"));
        }
        Ok(Self(s.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for Subject {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Subject::parse_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_value_verbatim() {
        let subject = Subject::parse_str("d860efca-22d9-47fd-8249-791ba61b07c7").unwrap();
        assert_eq!(subject.as_str(), "d860efca-22d9-47fd-8249-791ba61b07c7");
        assert_eq!(subject.to_string(), "d860efca-22d9-47fd-8249-791ba61b07c7");
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert!(Subject::parse_str("").is_err());
        assert!(Subject::parse_str(" \t").is_err());
    }

    #[test]
    fn test_parse_rejects_control_characters() {
        assert!(Subject::parse_str("sub\n42").is_err());
    }

    #[test]
    fn test_parse_rejects_oversized() {
        let long = "s".repeat(MAX_SUBJECT_LENGTH + 1);
        let err = Subject::parse_str(&long).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_serde_transparent() {
        let subject: Subject = "sub-42".parse().unwrap();
        assert_eq!(serde_json::to_string(&subject).unwrap(), r#""sub-42""#);
    }
}
