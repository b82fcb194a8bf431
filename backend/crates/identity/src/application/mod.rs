//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod profile;

// Re-exports
pub use config::ProfileConfig;
pub use profile::ClaimsProfileResolver;
