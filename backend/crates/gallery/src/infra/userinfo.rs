//! HTTP Userinfo Client

use url::Url;

use crate::domain::{TokenHandle, UserInfoClaim, UserInfoClient};
use crate::error::{GalleryError, GalleryResult};

#[derive(Clone)]
pub struct HttpUserInfoClient {
    client: reqwest::Client,
}

impl HttpUserInfoClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl UserInfoClient for HttpUserInfoClient {
    async fn fetch(&self, endpoint: &Url, access_token: &TokenHandle) -> GalleryResult<Vec<UserInfoClaim>> {
        let response = self
            .client
            .get(endpoint.clone())
            .bearer_auth(access_token.expose())
            .send()
            .await
            .map_err(|e| GalleryError::UserInfoFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GalleryError::UserInfoFailed(format!("userinfo endpoint returned {status}")));
        }

        let object: serde_json::Map<String, serde_json::Value> = response
            .json()
            .await
            .map_err(|e| GalleryError::UserInfoFailed(format!("invalid userinfo response: {e}")))?;

        Ok(UserInfoClaim::from_json_object(object))
    }
}
