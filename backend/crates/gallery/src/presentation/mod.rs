//! Presentation Layer
//!
//! HTTP handlers, DTOs, the session-token extractor and router.

pub mod dto;
pub mod handlers;
pub mod router;
pub mod session;

pub use handlers::GalleryAppState;
pub use router::{gallery_router, gallery_router_generic};
pub use session::SessionTokens;
