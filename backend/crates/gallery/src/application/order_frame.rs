//! Order Frame Use Case
//!
//! Looks up the signed-in user's postal address at the provider's userinfo
//! endpoint.

use std::sync::Arc;

use platform::client::with_deadline;

use crate::application::config::GalleryConfig;
use crate::application::discovery::resolve_discovery;
use crate::domain::{DiscoveryResolver, TokenHandle, UserInfoClient};
use crate::error::{GalleryError, GalleryResult};

/// Claim type carrying the postal address
pub const ADDRESS_CLAIM: &str = "address";

pub struct OrderFrameUseCase<D, U>
where
    D: DiscoveryResolver,
    U: UserInfoClient,
{
    discovery: Arc<D>,
    userinfo: Arc<U>,
    config: Arc<GalleryConfig>,
}

impl<D, U> OrderFrameUseCase<D, U>
where
    D: DiscoveryResolver + Sync,
    U: UserInfoClient + Sync,
{
    pub fn new(discovery: Arc<D>, userinfo: Arc<U>, config: Arc<GalleryConfig>) -> Self {
        Self {
            discovery,
            userinfo,
            config,
        }
    }

    /// First `address` claim for the session's access token, if the
    /// provider returned one.
    pub async fn execute(&self, access_token: Option<&TokenHandle>) -> GalleryResult<Option<String>> {
        let access_token = access_token
            .ok_or_else(|| GalleryError::UserInfoFailed("no access token in session".to_string()))?;

        let document = resolve_discovery(self.discovery.as_ref(), &self.config).await?;

        let claims = with_deadline(
            self.config.userinfo_deadline,
            self.userinfo.fetch(&document.userinfo_endpoint, access_token),
        )
        .await
        .map_err(|elapsed| GalleryError::UserInfoFailed(elapsed.to_string()))??;

        let address = claims
            .into_iter()
            .find(|claim| claim.claim_type == ADDRESS_CLAIM)
            .map(|claim| claim.value);

        tracing::debug!(has_address = address.is_some(), "Resolved order frame address");
        Ok(address)
    }
}
