//! Gallery Router

use axum::{
    Router,
    routing::{delete, get, post},
};
use std::sync::Arc;

use crate::application::config::GalleryConfig;
use crate::domain::{DiscoveryResolver, ImageApi, TokenRevoker, UserInfoClient};
use crate::error::{GalleryError, GalleryResult};
use crate::infra::{HttpDiscoveryResolver, HttpImageApi, HttpTokenRevocationClient, HttpUserInfoClient};
use crate::presentation::handlers::{self, GalleryAppState};

/// Create the gallery router with the HTTP collaborators sharing `client`
pub fn gallery_router(config: GalleryConfig, client: reqwest::Client) -> GalleryResult<Router> {
    let discovery = HttpDiscoveryResolver::new(client.clone(), config.discovery_policy());
    let revoker = HttpTokenRevocationClient::new(
        client.clone(),
        config.client_id.clone(),
        config.client_secret.clone(),
    );
    let userinfo = HttpUserInfoClient::new(client.clone());
    let api = HttpImageApi::new(client, &config.api_base_url)
        .map_err(|e| GalleryError::Internal(format!("invalid API base URL: {e}")))?;

    Ok(gallery_router_generic(discovery, revoker, userinfo, api, config))
}

/// Create a gallery router for any collaborator implementations
pub fn gallery_router_generic<D, R, U, A>(
    discovery: D,
    revoker: R,
    userinfo: U,
    api: A,
    config: GalleryConfig,
) -> Router
where
    D: DiscoveryResolver + Clone + Send + Sync + 'static,
    R: TokenRevoker + Clone + Send + Sync + 'static,
    U: UserInfoClient + Clone + Send + Sync + 'static,
    A: ImageApi + Clone + Send + Sync + 'static,
{
    let state = GalleryAppState {
        discovery: Arc::new(discovery),
        revoker: Arc::new(revoker),
        userinfo: Arc::new(userinfo),
        api: Arc::new(api),
        config: Arc::new(config),
    };

    Router::new()
        .route("/logout", post(handlers::logout::<D, R, U, A>))
        .route("/order-frame", get(handlers::order_frame::<D, R, U, A>))
        .route("/images", get(handlers::list_images::<D, R, U, A>))
        .route("/images/{id}", delete(handlers::delete_image::<D, R, U, A>))
        .with_state(state)
}
