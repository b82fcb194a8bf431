//! Value Object Module

pub mod auth_scheme;
pub mod token;
pub mod userinfo_claim;
