//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Outbound HTTP client construction and per-call deadlines
//! - Client secret handling (zeroized, redacted)
//! - HTTP Basic client authentication
//! - Cookie management for authentication schemes

pub mod basic_auth;
pub mod client;
pub mod cookie;
pub mod secret;
