//! Application Layer
//!
//! Use cases and configuration for the gallery relying party.

pub mod config;
pub mod discovery;
pub mod dispatch;
pub mod images;
pub mod order_frame;
pub mod sign_out;

// Re-exports
pub use config::GalleryConfig;
pub use dispatch::{ApiOutcomeDispatcher, Dispatched};
pub use images::ImageGalleryUseCase;
pub use order_frame::OrderFrameUseCase;
pub use sign_out::{SessionTerminator, SignOutUseCase, TerminationReport};
