//! Value Object Module

pub mod claim;
pub mod subject;
