//! Token Handle Value Object
//!
//! Opaque bearer strings for access and refresh tokens. They are never
//! parsed, only forwarded to the revocation and userinfo endpoints.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Which token a handle refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    /// RFC 7009 `token_type_hint` value
    #[inline]
    pub const fn hint(&self) -> &'static str {
        match self {
            TokenKind::Access => "access_token",
            TokenKind::Refresh => "refresh_token",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Access => f.write_str("access"),
            TokenKind::Refresh => f.write_str("refresh"),
        }
    }
}

/// Opaque bearer token, zeroized on drop and redacted in `Debug`
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct TokenHandle(String);

impl TokenHandle {
    /// Wrap a raw token; blank input is "no token", not an error.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return None;
        }
        Some(Self(raw))
    }

    /// Same as [`TokenHandle::new`] for values that may be absent
    pub fn from_optional(raw: Option<&str>) -> Option<Self> {
        raw.and_then(Self::new)
    }

    /// Borrow the raw token for a single outbound request
    #[inline]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TokenHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TokenHandle([REDACTED])")
    }
}
