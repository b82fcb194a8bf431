//! Identity Provider Profile Module
//!
//! Clean Architecture structure:
//! - `domain/` - Subject and claim value objects, user repository trait
//! - `application/` - Claims profile resolution and activity checks
//! - `infra/` - PostgreSQL and in-memory user stores
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Guarantees
//! - Claims are a pure projection of the user store: nothing is added,
//!   dropped, renamed, or deduplicated
//! - Activity is read from the store on every check, never cached
//! - Profiles are only issued to active subjects

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::{ClaimsProfileResolver, ProfileConfig};
pub use domain::{Claim, Subject, UserRepository};
pub use error::{IdentityError, IdentityResult};
pub use infra::{InMemoryUserRepository, PgUserRepository};
pub use presentation::router::{profile_router, profile_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
