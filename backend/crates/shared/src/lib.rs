//! Shared Kernel - Domain-crossing minimal core
//!
//! Error vocabulary shared by the identity provider and the gallery client:
//! - [`error::kind::ErrorKind`] classifies failures and maps them to HTTP statuses
//! - [`error::app_error::AppError`] is the unified error carried to the HTTP boundary
//!
//! Only things with the same meaning on both sides of the protocol live here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
