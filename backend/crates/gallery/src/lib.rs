//! Image Gallery Relying-Party Module
//!
//! Clean Architecture structure:
//! - `domain/` - Tokens, schemes, discovery document, API outcome, gateway traits
//! - `application/` - Sign-out, order frame and image use cases, outcome dispatcher
//! - `infra/` - HTTP clients for the identity provider and image API, cookie sign-out
//! - `presentation/` - HTTP handlers, DTOs, session extractor, router
//!
//! ## Guarantees
//! - Access-token revocation strictly precedes refresh-token revocation,
//!   and local sign-out follows both
//! - Local schemes are always ended on logout, even if revocation fails
//! - Denied API calls redirect without running the success continuation
//! - Discovery is resolved per operation and never cached

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    ApiOutcomeDispatcher, Dispatched, GalleryConfig, ImageGalleryUseCase, OrderFrameUseCase,
    SessionTerminator, SignOutUseCase, TerminationReport,
};
pub use domain::{
    ApiOutcome, AuthScheme, DiscoveryDocument, DiscoveryResolver, EndpointKind, TokenHandle,
    TokenKind,
};
pub use error::{GalleryError, GalleryResult};
pub use presentation::{SessionTokens, gallery_router, gallery_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
