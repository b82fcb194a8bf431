//! Discovery Document Entity
//!
//! Provider metadata resolved from an authority's well-known discovery
//! endpoint. Lives for a single logout or order-frame operation.

use serde::Deserialize;
use url::Url;

/// Path of the OpenID Connect discovery document under the authority
pub const WELL_KNOWN_PATH: &str = ".well-known/openid-configuration";

/// Raw metadata as served by the provider
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderMetadata {
    pub issuer: String,
    pub revocation_endpoint: Option<String>,
    pub userinfo_endpoint: Option<String>,
}

/// Validation applied to the authority and the served metadata
#[derive(Debug, Clone, Copy)]
pub struct DiscoveryPolicy {
    /// Only `https` URLs are accepted (loopback hosts are exempt)
    pub require_https: bool,
    /// The document's `issuer` must equal the authority
    pub validate_issuer_name: bool,
}

impl Default for DiscoveryPolicy {
    fn default() -> Self {
        Self {
            require_https: true,
            validate_issuer_name: true,
        }
    }
}

/// Why metadata was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetadataError {
    #[error("Invalid authority URL: {0}")]
    InvalidAuthority(String),
    #[error("HTTPS required for {0}")]
    HttpsRequired(String),
    #[error("Issuer name mismatch: expected {expected}, got {actual}")]
    IssuerMismatch { expected: String, actual: String },
    #[error("Missing {0} in discovery document")]
    MissingEndpoint(&'static str),
    #[error("Invalid {field}: {value}")]
    InvalidEndpoint { field: &'static str, value: String },
}

/// Validated provider metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryDocument {
    pub issuer: String,
    pub revocation_endpoint: Url,
    pub userinfo_endpoint: Url,
}

impl DiscoveryDocument {
    /// Parse the authority and normalize it to end in `/`, so that relative
    /// joins stay under its path.
    pub fn parse_authority(authority: &str, policy: &DiscoveryPolicy) -> Result<Url, MetadataError> {
        let mut url = Url::parse(authority.trim())
            .map_err(|e| MetadataError::InvalidAuthority(format!("{authority}: {e}")))?;
        if url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(MetadataError::InvalidAuthority(authority.to_string()));
        }
        check_scheme(&url, policy)?;

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url.set_query(None);
        url.set_fragment(None);
        Ok(url)
    }

    /// URL of the discovery document for a parsed authority
    pub fn well_known_url(authority: &Url) -> Result<Url, MetadataError> {
        authority
            .join(WELL_KNOWN_PATH)
            .map_err(|e| MetadataError::InvalidAuthority(e.to_string()))
    }

    /// Validate served metadata against the authority it came from
    pub fn from_metadata(
        authority: &Url,
        metadata: ProviderMetadata,
        policy: &DiscoveryPolicy,
    ) -> Result<Self, MetadataError> {
        if policy.validate_issuer_name {
            let expected = authority.as_str().trim_end_matches('/');
            let actual = metadata.issuer.trim_end_matches('/');
            if expected != actual {
                return Err(MetadataError::IssuerMismatch {
                    expected: expected.to_string(),
                    actual: metadata.issuer,
                });
            }
        }

        let revocation_endpoint = parse_endpoint(
            "revocation_endpoint",
            metadata.revocation_endpoint.as_deref(),
            policy,
        )?;
        let userinfo_endpoint =
            parse_endpoint("userinfo_endpoint", metadata.userinfo_endpoint.as_deref(), policy)?;

        Ok(Self {
            issuer: metadata.issuer,
            revocation_endpoint,
            userinfo_endpoint,
        })
    }
}

fn parse_endpoint(
    field: &'static str,
    value: Option<&str>,
    policy: &DiscoveryPolicy,
) -> Result<Url, MetadataError> {
    let value = value
        .filter(|v| !v.trim().is_empty())
        .ok_or(MetadataError::MissingEndpoint(field))?;
    let url = Url::parse(value).map_err(|_| MetadataError::InvalidEndpoint {
        field,
        value: value.to_string(),
    })?;
    check_scheme(&url, policy)?;
    Ok(url)
}

fn check_scheme(url: &Url, policy: &DiscoveryPolicy) -> Result<(), MetadataError> {
    match url.scheme() {
        "https" => Ok(()),
        "http" if !policy.require_https || is_loopback(url) => Ok(()),
        "http" => Err(MetadataError::HttpsRequired(url.to_string())),
        _ => Err(MetadataError::InvalidAuthority(url.to_string())),
    }
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(url::Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(url::Host::Ipv4(ip)) => ip.is_loopback(),
        Some(url::Host::Ipv6(ip)) => ip.is_loopback(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(issuer: &str) -> ProviderMetadata {
        ProviderMetadata {
            issuer: issuer.to_string(),
            revocation_endpoint: Some("https://idp.example.com/connect/revocation".to_string()),
            userinfo_endpoint: Some("https://idp.example.com/connect/userinfo".to_string()),
        }
    }

    #[test]
    fn test_parse_authority_appends_slash() {
        let policy = DiscoveryPolicy::default();
        let url = DiscoveryDocument::parse_authority("https://idp.example.com/tenant", &policy).unwrap();
        assert_eq!(url.as_str(), "https://idp.example.com/tenant/");
        assert_eq!(
            DiscoveryDocument::well_known_url(&url).unwrap().as_str(),
            "https://idp.example.com/tenant/.well-known/openid-configuration"
        );
    }

    #[test]
    fn test_parse_authority_rejects_plain_http() {
        let policy = DiscoveryPolicy::default();
        assert!(matches!(
            DiscoveryDocument::parse_authority("http://idp.example.com", &policy),
            Err(MetadataError::HttpsRequired(_))
        ));
        assert!(DiscoveryDocument::parse_authority("http://localhost:5000", &policy).is_ok());
        assert!(DiscoveryDocument::parse_authority("http://127.0.0.1:5000", &policy).is_ok());

        let relaxed = DiscoveryPolicy {
            require_https: false,
            ..Default::default()
        };
        assert!(DiscoveryDocument::parse_authority("http://idp.example.com", &relaxed).is_ok());
    }

    #[test]
    fn test_parse_authority_rejects_garbage() {
        let policy = DiscoveryPolicy::default();
        assert!(DiscoveryDocument::parse_authority("not a url", &policy).is_err());
        assert!(DiscoveryDocument::parse_authority("mailto:x@example.com", &policy).is_err());
    }

    #[test]
    fn test_from_metadata_accepts_matching_issuer() {
        let policy = DiscoveryPolicy::default();
        let authority = DiscoveryDocument::parse_authority("https://idp.example.com", &policy).unwrap();

        let doc =
            DiscoveryDocument::from_metadata(&authority, metadata("https://idp.example.com"), &policy)
                .unwrap();
        assert_eq!(
            doc.revocation_endpoint.as_str(),
            "https://idp.example.com/connect/revocation"
        );
        assert_eq!(doc.userinfo_endpoint.path(), "/connect/userinfo");
    }

    #[test]
    fn test_from_metadata_rejects_issuer_mismatch() {
        let policy = DiscoveryPolicy::default();
        let authority = DiscoveryDocument::parse_authority("https://idp.example.com", &policy).unwrap();

        let result =
            DiscoveryDocument::from_metadata(&authority, metadata("https://evil.example.com"), &policy);
        assert!(matches!(result, Err(MetadataError::IssuerMismatch { .. })));

        let lenient = DiscoveryPolicy {
            validate_issuer_name: false,
            ..Default::default()
        };
        assert!(
            DiscoveryDocument::from_metadata(&authority, metadata("https://evil.example.com"), &lenient)
                .is_ok()
        );
    }

    #[test]
    fn test_from_metadata_requires_endpoints() {
        let policy = DiscoveryPolicy::default();
        let authority = DiscoveryDocument::parse_authority("https://idp.example.com", &policy).unwrap();

        let mut missing = metadata("https://idp.example.com");
        missing.revocation_endpoint = None;
        assert_eq!(
            DiscoveryDocument::from_metadata(&authority, missing, &policy),
            Err(MetadataError::MissingEndpoint("revocation_endpoint"))
        );

        let mut relative = metadata("https://idp.example.com");
        relative.userinfo_endpoint = Some("/connect/userinfo".to_string());
        assert!(matches!(
            DiscoveryDocument::from_metadata(&authority, relative, &policy),
            Err(MetadataError::InvalidEndpoint { field: "userinfo_endpoint", .. })
        ));
    }
}
