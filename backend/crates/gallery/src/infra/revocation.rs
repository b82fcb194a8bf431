//! HTTP Token Revocation Client
//!
//! RFC 7009 revocation: a form-encoded POST carrying the token and its type
//! hint, authenticated with the client credentials over HTTP Basic.

use platform::basic_auth::ClientCredentials;
use platform::secret::ClientSecret;
use serde::Deserialize;
use url::Url;

use crate::domain::{RevocationError, TokenHandle, TokenKind, TokenRevoker};

/// OAuth error body returned with a non-success status
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Clone)]
pub struct HttpTokenRevocationClient {
    client: reqwest::Client,
    credentials: ClientCredentials,
}

impl HttpTokenRevocationClient {
    pub fn new(client: reqwest::Client, client_id: impl Into<String>, client_secret: ClientSecret) -> Self {
        Self {
            client,
            credentials: ClientCredentials::new(client_id, client_secret),
        }
    }
}

impl TokenRevoker for HttpTokenRevocationClient {
    async fn revoke(
        &self,
        endpoint: &Url,
        token: &TokenHandle,
        kind: TokenKind,
    ) -> Result<(), RevocationError> {
        let response = self
            .client
            .post(endpoint.clone())
            .header(reqwest::header::AUTHORIZATION, self.credentials.authorization_value())
            .form(&[("token", token.expose()), ("token_type_hint", kind.hint())])
            .send()
            .await
            .map_err(|e| RevocationError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let error = response.json::<ErrorBody>().await.ok().map(|body| body.error);
        Err(RevocationError::Provider {
            status: status.as_u16(),
            error,
        })
    }
}
