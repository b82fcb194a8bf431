//! HTTP Image API Client
//!
//! Sends bearer-authenticated requests to the image API and classifies the
//! responses. Bodies are only read for success outcomes.

use url::Url;

use crate::domain::{ApiOutcome, EndpointKind, ImageApi, TokenHandle};
use crate::error::{GalleryError, GalleryResult};

#[derive(Clone)]
pub struct HttpImageApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpImageApi {
    /// `base_url` is normalized to end in `/` so relative paths stay under it.
    pub fn new(client: reqwest::Client, base_url: &str) -> Result<Self, url::ParseError> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { client, base_url })
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        access_token: Option<&TokenHandle>,
        endpoint: EndpointKind,
    ) -> GalleryResult<ApiOutcome<Vec<u8>>> {
        let request = match access_token {
            Some(token) => request.bearer_auth(token.expose()),
            None => request,
        };

        let response = request
            .send()
            .await
            .map_err(|e| GalleryError::UpstreamUnavailable(e.to_string()))?;

        outcome_of(response, endpoint).await
    }

    fn url(&self, path: &str) -> GalleryResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| GalleryError::Internal(format!("invalid API path {path}: {e}")))
    }
}

/// Reason phrase from the status line when the server sent a non-canonical
/// one. Canonical phrases are not stored by the HTTP stack.
fn reason_phrase(response: &reqwest::Response) -> Option<String> {
    response
        .extensions()
        .get::<hyper::ext::ReasonPhrase>()
        .and_then(|phrase| std::str::from_utf8(phrase.as_bytes()).ok())
        .map(str::to_string)
}

/// Classify a response, reading the body only on success.
pub async fn outcome_of(
    response: reqwest::Response,
    endpoint: EndpointKind,
) -> GalleryResult<ApiOutcome<Vec<u8>>> {
    let status = response.status();
    let reason = reason_phrase(&response);
    match ApiOutcome::classify(status, reason.as_deref(), endpoint, ()) {
        ApiOutcome::Success(()) => {
            let body = response
                .bytes()
                .await
                .map_err(|e| GalleryError::UpstreamUnavailable(e.to_string()))?;
            Ok(ApiOutcome::Success(body.to_vec()))
        }
        ApiOutcome::AuthDenied => Ok(ApiOutcome::AuthDenied),
        ApiOutcome::Fatal { status, reason } => Ok(ApiOutcome::Fatal { status, reason }),
    }
}

impl ImageApi for HttpImageApi {
    async fn get(
        &self,
        path: &str,
        access_token: Option<&TokenHandle>,
    ) -> GalleryResult<ApiOutcome<Vec<u8>>> {
        let request = self.client.get(self.url(path)?);
        self.send(request, access_token, EndpointKind::Query).await
    }

    async fn delete(
        &self,
        path: &str,
        access_token: Option<&TokenHandle>,
    ) -> GalleryResult<ApiOutcome<Vec<u8>>> {
        let request = self.client.delete(self.url(path)?);
        self.send(request, access_token, EndpointKind::Mutation).await
    }
}
