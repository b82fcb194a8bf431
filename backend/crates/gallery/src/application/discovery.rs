//! Deadline-bounded discovery shared by the use cases that need provider
//! metadata.

use platform::client::with_deadline;

use crate::application::config::GalleryConfig;
use crate::domain::{DiscoveryDocument, DiscoveryResolver};
use crate::error::{GalleryError, GalleryResult};

/// Resolve the configured authority, failing with `DiscoveryUnavailable`
/// when the deadline elapses.
pub async fn resolve_discovery<D>(resolver: &D, config: &GalleryConfig) -> GalleryResult<DiscoveryDocument>
where
    D: DiscoveryResolver + Sync,
{
    with_deadline(config.discovery_deadline, resolver.resolve(&config.authority))
        .await
        .map_err(|elapsed| GalleryError::DiscoveryUnavailable(elapsed.to_string()))?
}
