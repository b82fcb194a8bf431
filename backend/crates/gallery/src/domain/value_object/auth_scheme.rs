//! Authentication Scheme Value Object
//!
//! A named local authentication scheme and the cookie that carries it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthScheme {
    /// Scheme name, e.g. `Cookies` or `oidc`
    pub name: String,
    /// Base cookie name; large tickets are split into `{cookie_name}C1..Cn`
    pub cookie_name: String,
}

impl AuthScheme {
    pub fn new(name: impl Into<String>, cookie_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cookie_name: cookie_name.into(),
        }
    }

    /// Primary cookie-based session scheme
    pub fn cookies() -> Self {
        Self::new("Cookies", ".AspNetCore.Cookies")
    }

    /// External identity (OpenID Connect) scheme
    pub fn oidc() -> Self {
        Self::new("oidc", ".AspNetCore.oidc")
    }

    /// Whether `cookie` is this scheme's cookie or one of its chunks
    pub fn owns_cookie(&self, cookie: &str) -> bool {
        match cookie.strip_prefix(self.cookie_name.as_str()) {
            Some("") => true,
            Some(rest) => rest
                .strip_prefix('C')
                .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit())),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owns_cookie_and_chunks() {
        let scheme = AuthScheme::cookies();
        assert!(scheme.owns_cookie(".AspNetCore.Cookies"));
        assert!(scheme.owns_cookie(".AspNetCore.CookiesC1"));
        assert!(scheme.owns_cookie(".AspNetCore.CookiesC12"));
        assert!(!scheme.owns_cookie(".AspNetCore.CookiesC"));
        assert!(!scheme.owns_cookie(".AspNetCore.CookiesX"));
        assert!(!scheme.owns_cookie(".AspNetCore.oidc"));
    }
}
