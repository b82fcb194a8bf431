//! Outbound HTTP client utilities
//!
//! Construction of the shared `reqwest` client and per-call deadlines for
//! requests to the identity provider and the resource API.

use std::future::Future;
use std::time::Duration;

/// Outbound HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// TCP/TLS connect timeout
    pub connect_timeout: Duration,
    /// User-Agent sent on every outbound request
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            user_agent: concat!("image-gallery/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Error when building the outbound client
#[derive(Debug, thiserror::Error)]
#[error("Failed to build HTTP client: {0}")]
pub struct HttpClientBuildError(#[from] reqwest::Error);

/// A network call did not finish before its deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Deadline of {0:?} elapsed")]
pub struct DeadlineElapsed(pub Duration);

/// Build the shared outbound client.
///
/// Redirects are not followed: discovery, revocation and userinfo endpoints
/// answer directly, and a redirect there indicates a misconfigured authority.
pub fn build_http_client(config: &HttpClientConfig) -> Result<reqwest::Client, HttpClientBuildError> {
    let client = reqwest::Client::builder()
        .connect_timeout(config.connect_timeout)
        .user_agent(config.user_agent.as_str())
        .redirect(reqwest::redirect::Policy::none())
        .build()?;
    Ok(client)
}

/// Bound a network suspension point with a deadline.
///
/// ## Returns
/// * `Ok(output)` - The future completed in time
/// * `Err(DeadlineElapsed)` - The deadline passed first; the future is dropped
pub async fn with_deadline<F>(deadline: Duration, future: F) -> Result<F::Output, DeadlineElapsed>
where
    F: Future,
{
    tokio::time::timeout(deadline, future)
        .await
        .map_err(|_| DeadlineElapsed(deadline))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_default_client() {
        let client = build_http_client(&HttpClientConfig::default());
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_with_deadline_completes() {
        let result = with_deadline(Duration::from_secs(1), async { 7 }).await;
        assert_eq!(result, Ok(7));
    }

    #[tokio::test(start_paused = true)]
    async fn test_with_deadline_elapsed() {
        let deadline = Duration::from_millis(50);
        let result = with_deadline(deadline, tokio::time::sleep(Duration::from_secs(10))).await;
        assert_eq!(result, Err(DeadlineElapsed(deadline)));
    }
}
