//! Domain Layer
//!
//! Contains value objects and repository traits.

pub mod repository;
pub mod value_object;

// Re-exports
pub use repository::UserRepository;
pub use value_object::{claim::Claim, subject::Subject};
