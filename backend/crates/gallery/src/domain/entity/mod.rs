//! Entity Module

pub mod api_outcome;
pub mod discovery_document;
pub mod image;
