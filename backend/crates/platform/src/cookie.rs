//! Cookie Management Infrastructure
//!
//! Reading request cookies and building the `Set-Cookie` values that end a
//! cookie-backed authentication session.

use axum::http::{HeaderMap, HeaderValue, header};

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Attributes shared by every authentication cookie the application issues.
///
/// A deletion cookie must carry the same `Path` (and `Secure`/`SameSite`)
/// as the original or browsers keep the old one.
#[derive(Debug, Clone)]
pub struct CookieAttributes {
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
}

impl Default for CookieAttributes {
    fn default() -> Self {
        Self {
            secure: true,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
        }
    }
}

impl CookieAttributes {
    /// Build Set-Cookie header value that expires `name` immediately
    pub fn build_delete_cookie(&self, name: &str) -> String {
        let mut parts = vec![
            format!("{name}="),
            format!("Path={}", self.path),
            "Max-Age=0".to_string(),
            "Expires=Thu, 01 Jan 1970 00:00:00 GMT".to_string(),
        ];

        if self.http_only {
            parts.push("HttpOnly".to_string());
        }
        if self.secure {
            parts.push("Secure".to_string());
        }
        parts.push(format!("SameSite={}", self.same_site.as_str()));

        parts.join("; ")
    }

    /// Deletion cookie as a header value
    pub fn delete_cookie_header(&self, name: &str) -> Option<HeaderValue> {
        HeaderValue::from_str(&self.build_delete_cookie(name)).ok()
    }
}

/// Names of every cookie sent with the request, in header order
pub fn cookie_names(headers: &HeaderMap) -> Vec<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .filter_map(|cookie| {
            let (key, _) = cookie.trim().split_once('=')?;
            Some(key.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_delete_cookie() {
        let attrs = CookieAttributes {
            secure: true,
            http_only: true,
            same_site: SameSite::None,
            path: "/gallery".to_string(),
        };

        let cookie = attrs.build_delete_cookie(".AspNetCore.Cookies");
        assert!(cookie.starts_with(".AspNetCore.Cookies=;"));
        assert!(cookie.contains("Path=/gallery"));
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.contains("Expires=Thu, 01 Jan 1970 00:00:00 GMT"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("SameSite=None"));
    }

    #[test]
    fn test_build_delete_cookie_insecure() {
        let attrs = CookieAttributes {
            secure: false,
            ..Default::default()
        };
        let cookie = attrs.build_delete_cookie("session");
        assert!(!cookie.contains("Secure"));
        assert!(cookie.contains("SameSite=Lax"));
    }

    #[test]
    fn test_cookie_names_across_headers() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("a=1; b=2"));
        headers.append(header::COOKIE, HeaderValue::from_static("c=3"));

        assert_eq!(cookie_names(&headers), vec!["a", "b", "c"]);
    }
}
