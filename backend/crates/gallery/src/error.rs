//! Gallery Error Types
//!
//! Relying-party error variants that integrate with the unified
//! `kernel::error::AppError` system. Access denial is not an error here;
//! it is a dispatch result that redirects.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::{MetadataError, TokenKind};

/// Gallery-specific result type alias
pub type GalleryResult<T> = Result<T, GalleryError>;

/// Gallery-specific error variants
#[derive(Debug, Error)]
pub enum GalleryError {
    /// Provider metadata could not be fetched or failed validation
    #[error("Discovery document unavailable: {0}")]
    DiscoveryUnavailable(String),

    /// The provider rejected or could not process a revocation
    #[error("Error occurred during revocation of {kind} token: {reason}")]
    RevocationFailed { kind: TokenKind, reason: String },

    /// The image API answered with a status outside the success set
    #[error("A problem happened while calling the API: {reason}")]
    UpstreamFailure { status: u16, reason: String },

    /// The image API could not be reached
    #[error("API unreachable: {0}")]
    UpstreamUnavailable(String),

    /// The userinfo endpoint failed or no access token was available
    #[error("Problem accessing UserInfo endpoint: {0}")]
    UserInfoFailed(String),

    /// A local authentication scheme could not be ended
    #[error("Sign-out of scheme {scheme} failed: {reason}")]
    SignOutFailed { scheme: String, reason: String },

    /// Malformed request input (e.g. an unusable image id)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GalleryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GalleryError::DiscoveryUnavailable(_) | GalleryError::UpstreamUnavailable(_) => {
                ErrorKind::ServiceUnavailable
            }
            GalleryError::RevocationFailed { .. }
            | GalleryError::UpstreamFailure { .. }
            | GalleryError::UserInfoFailed(_) => ErrorKind::BadGateway,
            GalleryError::InvalidRequest(_) => ErrorKind::BadRequest,
            GalleryError::SignOutFailed { .. } | GalleryError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Generic text shown to the user; details stay in the log
    fn public_message(&self) -> &'static str {
        match self {
            GalleryError::DiscoveryUnavailable(_) => "The identity provider is unavailable",
            GalleryError::RevocationFailed { .. } => "Sign-out could not be completed",
            GalleryError::UpstreamFailure { .. } | GalleryError::UpstreamUnavailable(_) => {
                "A problem happened while calling the API"
            }
            GalleryError::UserInfoFailed(_) => "User information is unavailable",
            GalleryError::InvalidRequest(_) => "Invalid request",
            GalleryError::SignOutFailed { .. } | GalleryError::Internal(_) => "Internal error",
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            GalleryError::DiscoveryUnavailable(msg) => {
                tracing::warn!(reason = %msg, "Discovery failed");
            }
            GalleryError::RevocationFailed { kind, reason } => {
                tracing::warn!(kind = %kind, reason = %reason, "Token revocation failed");
            }
            GalleryError::UpstreamFailure { status, reason } => {
                tracing::warn!(status = *status, reason = %reason, "Upstream API failure");
            }
            GalleryError::UpstreamUnavailable(msg) => {
                tracing::warn!(reason = %msg, "Upstream API unreachable");
            }
            GalleryError::UserInfoFailed(msg) => {
                tracing::warn!(reason = %msg, "Userinfo lookup failed");
            }
            GalleryError::SignOutFailed { scheme, reason } => {
                tracing::error!(scheme = %scheme, reason = %reason, "Local sign-out failed");
            }
            GalleryError::InvalidRequest(msg) => {
                tracing::debug!(reason = %msg, "Rejected request");
            }
            GalleryError::Internal(msg) => {
                tracing::error!(message = %msg, "Gallery internal error");
            }
        }
    }
}

impl IntoResponse for GalleryError {
    fn into_response(self) -> Response {
        self.log();
        AppError::new(self.kind(), self.public_message()).into_response()
    }
}

impl From<MetadataError> for GalleryError {
    fn from(err: MetadataError) -> Self {
        GalleryError::DiscoveryUnavailable(err.to_string())
    }
}
