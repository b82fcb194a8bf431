//! Application Configuration
//!
//! Configuration for the gallery relying party. Built once at startup and
//! shared by every use case.

use std::time::Duration;

use platform::{cookie::CookieAttributes, secret::ClientSecret};

use crate::domain::{AuthScheme, DiscoveryPolicy};

/// Relying-party configuration
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    /// Identity provider base URL
    pub authority: String,
    /// Client identifier registered with the provider
    pub client_id: String,
    /// Client secret used for revocation requests
    pub client_secret: ClientSecret,
    /// Image API base URL
    pub api_base_url: String,
    /// Reject non-`https` metadata URLs (loopback exempt)
    pub require_https_metadata: bool,
    /// Require the discovery `issuer` to equal the authority
    pub validate_issuer_name: bool,
    pub discovery_deadline: Duration,
    pub revocation_deadline: Duration,
    pub userinfo_deadline: Duration,
    pub api_deadline: Duration,
    /// Redirect target when the API denies access
    pub access_denied_path: String,
    /// Redirect target after logout
    pub post_logout_redirect: String,
    /// Primary cookie session scheme
    pub primary_scheme: AuthScheme,
    /// External identity (OpenID Connect) scheme
    pub external_scheme: AuthScheme,
    pub cookie: CookieAttributes,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            authority: "https://localhost:44373/".to_string(),
            client_id: "imagegalleryclient".to_string(),
            client_secret: ClientSecret::new(""),
            api_base_url: "https://localhost:44351/".to_string(),
            require_https_metadata: true,
            validate_issuer_name: true,
            discovery_deadline: Duration::from_secs(10),
            revocation_deadline: Duration::from_secs(10),
            userinfo_deadline: Duration::from_secs(10),
            api_deadline: Duration::from_secs(30),
            access_denied_path: "/Authorization/AccessDenied".to_string(),
            post_logout_redirect: "/".to_string(),
            primary_scheme: AuthScheme::cookies(),
            external_scheme: AuthScheme::oidc(),
            cookie: CookieAttributes::default(),
        }
    }
}

impl GalleryConfig {
    /// Create config for development (plain HTTP provider, non-secure cookies)
    pub fn development() -> Self {
        Self {
            require_https_metadata: false,
            cookie: CookieAttributes {
                secure: false,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Schemes ended on logout, primary first
    pub fn schemes(&self) -> [&AuthScheme; 2] {
        [&self.primary_scheme, &self.external_scheme]
    }

    pub fn discovery_policy(&self) -> DiscoveryPolicy {
        DiscoveryPolicy {
            require_https: self.require_https_metadata,
            validate_issuer_name: self.validate_issuer_name,
        }
    }
}
