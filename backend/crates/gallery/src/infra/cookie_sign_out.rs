//! Cookie Sign-Out
//!
//! Ends a cookie-backed scheme by emitting deletion `Set-Cookie` headers for
//! the scheme's cookie and every chunk of it the browser sent.

use std::sync::Mutex;

use axum::http::{HeaderMap, HeaderValue};
use platform::cookie::{CookieAttributes, cookie_names};

use crate::domain::{AuthScheme, SchemeSignOut};
use crate::error::{GalleryError, GalleryResult};

/// Per-request sign-out collecting the headers for the response
pub struct CookieSignOut {
    attributes: CookieAttributes,
    request_cookies: Vec<String>,
    pending: Mutex<Vec<HeaderValue>>,
}

impl CookieSignOut {
    pub fn new(attributes: CookieAttributes, request_headers: &HeaderMap) -> Self {
        Self {
            attributes,
            request_cookies: cookie_names(request_headers),
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Deletion headers accumulated so far
    pub fn into_headers(self) -> Vec<HeaderValue> {
        self.pending
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SchemeSignOut for CookieSignOut {
    async fn sign_out(&self, scheme: &AuthScheme) -> GalleryResult<()> {
        let failed = |reason: String| GalleryError::SignOutFailed {
            scheme: scheme.name.clone(),
            reason,
        };

        // The base cookie is always expired, even if the browser didn't send it
        let mut names = vec![scheme.cookie_name.as_str()];
        names.extend(
            self.request_cookies
                .iter()
                .map(String::as_str)
                .filter(|name| *name != scheme.cookie_name && scheme.owns_cookie(name)),
        );

        let headers = names
            .into_iter()
            .map(|name| {
                self.attributes
                    .delete_cookie_header(name)
                    .ok_or_else(|| failed(format!("unrepresentable cookie name {name}")))
            })
            .collect::<GalleryResult<Vec<_>>>()?;

        self.pending
            .lock()
            .map_err(|_| failed("sign-out state poisoned".to_string()))?
            .extend(headers);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    #[tokio::test]
    async fn test_expires_base_cookie_and_chunks() {
        let mut request = HeaderMap::new();
        request.insert(
            header::COOKIE,
            HeaderValue::from_static(
                ".AspNetCore.CookiesC1=a; .AspNetCore.CookiesC2=b; theme=dark",
            ),
        );

        let sign_out = CookieSignOut::new(CookieAttributes::default(), &request);
        sign_out.sign_out(&AuthScheme::cookies()).await.unwrap();
        sign_out.sign_out(&AuthScheme::oidc()).await.unwrap();

        let headers: Vec<String> = sign_out
            .into_headers()
            .into_iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect();

        assert_eq!(headers.len(), 4);
        assert!(headers[0].starts_with(".AspNetCore.Cookies=;"));
        assert!(headers[1].starts_with(".AspNetCore.CookiesC1=;"));
        assert!(headers[2].starts_with(".AspNetCore.CookiesC2=;"));
        assert!(headers[3].starts_with(".AspNetCore.oidc=;"));
        assert!(headers.iter().all(|h| h.contains("Max-Age=0")));
        assert!(!headers.iter().any(|h| h.starts_with("theme")));
    }
}
