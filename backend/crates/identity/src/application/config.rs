//! Application Configuration
//!
//! Configuration for the identity-provider application layer.

use std::time::Duration;

use platform::basic_auth::ClientCredentials;
use platform::secret::ClientSecret;

/// Profile service configuration
#[derive(Debug, Clone)]
pub struct ProfileConfig {
    /// Deadline for each user-store lookup
    pub repository_deadline: Duration,
    /// Relying party allowed to read profiles (HTTP Basic).
    /// An empty secret rejects every request.
    pub relying_party: ClientCredentials,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            repository_deadline: Duration::from_secs(5),
            relying_party: ClientCredentials::new("imagegalleryclient", ClientSecret::new("")),
        }
    }
}

impl ProfileConfig {
    /// Create config for development (generous deadline for a local database)
    pub fn development() -> Self {
        Self {
            repository_deadline: Duration::from_secs(30),
            ..Default::default()
        }
    }
}
