//! Session Tokens Extractor
//!
//! The host's authentication middleware stores the tokens of the current
//! session as a request extension. A request without one has no tokens.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::domain::TokenHandle;

#[derive(Debug, Clone, Default)]
pub struct SessionTokens {
    pub access_token: Option<TokenHandle>,
    pub refresh_token: Option<TokenHandle>,
}

impl SessionTokens {
    /// Build from raw values; blank values count as absent.
    pub fn from_raw(access_token: Option<&str>, refresh_token: Option<&str>) -> Self {
        Self {
            access_token: TokenHandle::from_optional(access_token),
            refresh_token: TokenHandle::from_optional(refresh_token),
        }
    }
}

impl<S> FromRequestParts<S> for SessionTokens
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<SessionTokens>().cloned().unwrap_or_default())
    }
}
