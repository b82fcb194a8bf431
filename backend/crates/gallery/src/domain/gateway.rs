//! Gateway Traits
//!
//! Interfaces for the identity provider and the local authentication
//! schemes. HTTP implementations live in the infrastructure layer.

use url::Url;

use crate::domain::entity::{api_outcome::ApiOutcome, discovery_document::DiscoveryDocument};
use crate::domain::value_object::{
    auth_scheme::AuthScheme,
    token::{TokenHandle, TokenKind},
    userinfo_claim::UserInfoClaim,
};
use crate::error::GalleryResult;

/// Resolves provider metadata for an authority
#[trait_variant::make(DiscoveryResolver: Send)]
pub trait LocalDiscoveryResolver {
    /// Fetch and validate the discovery document. Every call goes to the
    /// network; nothing is cached.
    async fn resolve(&self, authority: &str) -> GalleryResult<DiscoveryDocument>;
}

/// Failure reported by a revocation call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RevocationError {
    /// The request never produced a response
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider answered with a non-success status
    #[error("provider returned {status}: {}", .error.as_deref().unwrap_or("no error code"))]
    Provider { status: u16, error: Option<String> },
}

/// RFC 7009 token revocation
#[trait_variant::make(TokenRevoker: Send)]
pub trait LocalTokenRevoker {
    async fn revoke(
        &self,
        endpoint: &Url,
        token: &TokenHandle,
        kind: TokenKind,
    ) -> Result<(), RevocationError>;
}

/// Userinfo lookup with a bearer access token
#[trait_variant::make(UserInfoClient: Send)]
pub trait LocalUserInfoClient {
    async fn fetch(&self, endpoint: &Url, access_token: &TokenHandle)
    -> GalleryResult<Vec<UserInfoClaim>>;
}

/// Ends a local authentication scheme session
#[trait_variant::make(SchemeSignOut: Send)]
pub trait LocalSchemeSignOut {
    async fn sign_out(&self, scheme: &AuthScheme) -> GalleryResult<()>;
}

/// Bearer-authenticated calls to the image API.
///
/// Implementations classify the response and only read the body on
/// success. They fail only when no response was received.
#[trait_variant::make(ImageApi: Send)]
pub trait LocalImageApi {
    async fn get(&self, path: &str, access_token: Option<&TokenHandle>)
    -> GalleryResult<ApiOutcome<Vec<u8>>>;

    async fn delete(&self, path: &str, access_token: Option<&TokenHandle>)
    -> GalleryResult<ApiOutcome<Vec<u8>>>;
}
