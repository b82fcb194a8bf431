//! HTTP Discovery Resolver

use crate::domain::{DiscoveryDocument, DiscoveryPolicy, DiscoveryResolver, ProviderMetadata};
use crate::error::{GalleryError, GalleryResult};

/// Fetches `/.well-known/openid-configuration` on every call
#[derive(Clone)]
pub struct HttpDiscoveryResolver {
    client: reqwest::Client,
    policy: DiscoveryPolicy,
}

impl HttpDiscoveryResolver {
    pub fn new(client: reqwest::Client, policy: DiscoveryPolicy) -> Self {
        Self { client, policy }
    }
}

impl DiscoveryResolver for HttpDiscoveryResolver {
    async fn resolve(&self, authority: &str) -> GalleryResult<DiscoveryDocument> {
        let authority = DiscoveryDocument::parse_authority(authority, &self.policy)?;
        let url = DiscoveryDocument::well_known_url(&authority)?;

        let unavailable = |e: reqwest::Error| GalleryError::DiscoveryUnavailable(format!("{url}: {e}"));

        let metadata: ProviderMetadata = self
            .client
            .get(url.clone())
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(unavailable)?
            .json()
            .await
            .map_err(unavailable)?;

        let document = DiscoveryDocument::from_metadata(&authority, metadata, &self.policy)?;

        tracing::debug!(issuer = %document.issuer, "Resolved discovery document");
        Ok(document)
    }
}
