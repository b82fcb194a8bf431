//! Domain Layer
//!
//! Contains entities, value objects and gateway traits.

pub mod entity;
pub mod gateway;
pub mod value_object;

// Re-exports
pub use entity::{
    api_outcome::{ApiOutcome, EndpointKind},
    discovery_document::{DiscoveryDocument, DiscoveryPolicy, MetadataError, ProviderMetadata},
    image::{Image, is_valid_image_id},
};
pub use gateway::{
    DiscoveryResolver, ImageApi, RevocationError, SchemeSignOut, TokenRevoker, UserInfoClient,
};
pub use value_object::{
    auth_scheme::AuthScheme,
    token::{TokenHandle, TokenKind},
    userinfo_claim::UserInfoClaim,
};
