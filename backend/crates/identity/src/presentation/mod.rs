//! Presentation Layer
//!
//! HTTP handlers, DTOs, client authentication and router.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::ProfileAppState;
pub use router::{profile_router, profile_router_generic};
