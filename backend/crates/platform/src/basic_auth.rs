//! HTTP Basic Client Authentication
//!
//! Confidential clients authenticate to the identity provider with
//! `Authorization: Basic base64(client_id:client_secret)`.

use axum::http::{HeaderMap, header};
use base64::{Engine, engine::general_purpose};

use crate::secret::ClientSecret;

/// Registered relying-party credentials
#[derive(Debug, Clone)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: ClientSecret,
}

impl ClientCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: ClientSecret) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret,
        }
    }

    /// `Basic ...` header value for these credentials
    pub fn authorization_value(&self) -> String {
        let pair = format!("{}:{}", self.client_id, self.client_secret.expose());
        format!("Basic {}", general_purpose::STANDARD.encode(pair))
    }

    /// Check the request's `Authorization` header against these credentials.
    ///
    /// An empty configured secret never matches.
    pub fn verify(&self, headers: &HeaderMap) -> bool {
        if self.client_secret.is_empty() {
            return false;
        }
        let Some((client_id, secret)) = basic_credentials(headers) else {
            return false;
        };

        let id_ok = constant_time_eq(client_id.as_bytes(), self.client_id.as_bytes());
        let secret_ok = constant_time_eq(secret.as_bytes(), self.client_secret.expose().as_bytes());
        id_ok & secret_ok
    }
}

/// Decode `Authorization: Basic` into `(user, password)`
pub fn basic_credentials(headers: &HeaderMap) -> Option<(String, String)> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, encoded) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = general_purpose::STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (user, password) = decoded.split_once(':')?;
    Some((user.to_string(), password.to_string()))
}

/// Constant-time comparison to prevent timing attacks
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn credentials() -> ClientCredentials {
        ClientCredentials::new("imagegalleryclient", ClientSecret::new("secret"))
    }

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_authorization_value_encodes_pair() {
        // base64("imagegalleryclient:secret")
        assert_eq!(
            credentials().authorization_value(),
            "Basic aW1hZ2VnYWxsZXJ5Y2xpZW50OnNlY3JldA=="
        );
    }

    #[test]
    fn test_verify_accepts_matching_credentials() {
        let creds = credentials();
        assert!(creds.verify(&headers(&creds.authorization_value())));
        assert!(creds.verify(&headers("basic aW1hZ2VnYWxsZXJ5Y2xpZW50OnNlY3JldA==")));
    }

    #[test]
    fn test_verify_rejects_wrong_or_missing_credentials() {
        let creds = credentials();
        let wrong = ClientCredentials::new("imagegalleryclient", ClientSecret::new("guess"));

        assert!(!creds.verify(&HeaderMap::new()));
        assert!(!creds.verify(&headers(&wrong.authorization_value())));
        assert!(!creds.verify(&headers("Bearer aW1hZ2VnYWxsZXJ5Y2xpZW50OnNlY3JldA==")));
        assert!(!creds.verify(&headers("Basic not-base64!")));
    }

    #[test]
    fn test_empty_secret_never_matches() {
        let creds = ClientCredentials::new("imagegalleryclient", ClientSecret::new(""));
        assert!(!creds.verify(&headers(&creds.authorization_value())));
    }

    #[test]
    fn test_basic_credentials_splits_on_first_colon() {
        // base64("client:pa:ss")
        let parsed = basic_credentials(&headers("Basic Y2xpZW50OnBhOnNz"));
        assert_eq!(parsed, Some(("client".to_string(), "pa:ss".to_string())));
    }
}
