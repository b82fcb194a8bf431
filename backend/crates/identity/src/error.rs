//! Identity Error Types
//!
//! Identity-provider error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Identity-specific result type alias
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Identity-specific error variants
#[derive(Debug, Error)]
pub enum IdentityError {
    /// The subject has no record in the user store.
    /// Callers treat this as "unauthenticated".
    #[error("Subject not found")]
    SubjectNotFound,

    /// The caller did not present the registered client credentials
    #[error("Client authentication required")]
    Unauthorized,

    /// The subject exists but may not be issued claims
    #[error("Account is not active")]
    AccountInactive,

    /// The user store did not answer before the deadline
    #[error("User store unavailable: {0}")]
    RepositoryUnavailable(String),

    /// Malformed request input (e.g. a blank subject)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IdentityError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            IdentityError::SubjectNotFound => ErrorKind::NotFound,
            IdentityError::Unauthorized => ErrorKind::Unauthorized,
            IdentityError::AccountInactive => ErrorKind::Forbidden,
            IdentityError::RepositoryUnavailable(_) => ErrorKind::ServiceUnavailable,
            IdentityError::InvalidRequest(_) => ErrorKind::BadRequest,
            IdentityError::Database(_) | IdentityError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            IdentityError::Database(e) => {
                tracing::error!(error = %e, "Identity database error");
            }
            IdentityError::Internal(msg) => {
                tracing::error!(message = %msg, "Identity internal error");
            }
            IdentityError::RepositoryUnavailable(msg) => {
                tracing::warn!(message = %msg, "User store unavailable");
            }
            IdentityError::AccountInactive => {
                tracing::warn!("Profile requested for inactive account");
            }
            IdentityError::Unauthorized => {
                tracing::warn!("Profile request without valid client credentials");
            }
            _ => {
                tracing::debug!(error = %self, "Identity error");
            }
        }
    }
}

impl IntoResponse for IdentityError {
    fn into_response(self) -> Response {
        self.log();
        match self {
            // Database details stay in the log
            IdentityError::Database(_) | IdentityError::Internal(_) => {
                AppError::internal("Internal error").into_response()
            }
            IdentityError::Unauthorized => {
                let mut response = self.to_app_error().into_response();
                response.headers_mut().insert(
                    header::WWW_AUTHENTICATE,
                    HeaderValue::from_static("Basic realm=\"idp\""),
                );
                response
            }
            _ => self.to_app_error().into_response(),
        }
    }
}

impl From<AppError> for IdentityError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => IdentityError::InvalidRequest(err.message().to_string()),
            _ => IdentityError::Internal(err.to_string()),
        }
    }
}

impl From<platform::client::DeadlineElapsed> for IdentityError {
    fn from(err: platform::client::DeadlineElapsed) -> Self {
        IdentityError::RepositoryUnavailable(err.to_string())
    }
}
