//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;

use crate::application::{
    Dispatched, GalleryConfig, ImageGalleryUseCase, OrderFrameUseCase, SignOutUseCase,
};
use crate::domain::{DiscoveryResolver, Image, ImageApi, TokenRevoker, UserInfoClient};
use crate::error::GalleryResult;
use crate::infra::CookieSignOut;
use crate::presentation::dto::OrderFrameResponse;
use crate::presentation::session::SessionTokens;

/// Where a successful image mutation lands
const IMAGES_INDEX: &str = "/images";

impl<T> IntoResponse for Dispatched<T>
where
    T: IntoResponse,
{
    fn into_response(self) -> Response {
        match self {
            Dispatched::Completed(value) => value.into_response(),
            Dispatched::AccessDenied { location } => Redirect::to(&location).into_response(),
        }
    }
}

/// Shared state for gallery handlers
#[derive(Clone)]
pub struct GalleryAppState<D, R, U, A>
where
    D: DiscoveryResolver + Clone + Send + Sync + 'static,
    R: TokenRevoker + Clone + Send + Sync + 'static,
    U: UserInfoClient + Clone + Send + Sync + 'static,
    A: ImageApi + Clone + Send + Sync + 'static,
{
    pub discovery: Arc<D>,
    pub revoker: Arc<R>,
    pub userinfo: Arc<U>,
    pub api: Arc<A>,
    pub config: Arc<GalleryConfig>,
}

impl<D, R, U, A> GalleryAppState<D, R, U, A>
where
    D: DiscoveryResolver + Clone + Send + Sync + 'static,
    R: TokenRevoker + Clone + Send + Sync + 'static,
    U: UserInfoClient + Clone + Send + Sync + 'static,
    A: ImageApi + Clone + Send + Sync + 'static,
{
    fn sign_out(&self) -> SignOutUseCase<D, R> {
        SignOutUseCase::new(self.discovery.clone(), self.revoker.clone(), self.config.clone())
    }

    fn order_frame(&self) -> OrderFrameUseCase<D, U> {
        OrderFrameUseCase::new(self.discovery.clone(), self.userinfo.clone(), self.config.clone())
    }

    fn images(&self) -> ImageGalleryUseCase<A> {
        ImageGalleryUseCase::new(self.api.clone(), self.config.clone())
    }
}

/// POST /logout
///
/// Local cookies are cleared even when revocation fails.
pub async fn logout<D, R, U, A>(
    State(state): State<GalleryAppState<D, R, U, A>>,
    headers: HeaderMap,
    tokens: SessionTokens,
) -> Response
where
    D: DiscoveryResolver + Clone + Send + Sync + 'static,
    R: TokenRevoker + Clone + Send + Sync + 'static,
    U: UserInfoClient + Clone + Send + Sync + 'static,
    A: ImageApi + Clone + Send + Sync + 'static,
{
    let local = CookieSignOut::new(state.config.cookie.clone(), &headers);

    let result = state
        .sign_out()
        .execute(
            tokens.access_token.as_ref(),
            tokens.refresh_token.as_ref(),
            &local,
        )
        .await;

    let mut response = match result {
        Ok(_) => Redirect::to(&state.config.post_logout_redirect).into_response(),
        Err(e) => e.into_response(),
    };

    for cookie in local.into_headers() {
        response.headers_mut().append(header::SET_COOKIE, cookie);
    }
    response
}

/// GET /order-frame
pub async fn order_frame<D, R, U, A>(
    State(state): State<GalleryAppState<D, R, U, A>>,
    tokens: SessionTokens,
) -> GalleryResult<Json<OrderFrameResponse>>
where
    D: DiscoveryResolver + Clone + Send + Sync + 'static,
    R: TokenRevoker + Clone + Send + Sync + 'static,
    U: UserInfoClient + Clone + Send + Sync + 'static,
    A: ImageApi + Clone + Send + Sync + 'static,
{
    let address = state
        .order_frame()
        .execute(tokens.access_token.as_ref())
        .await?;

    Ok(Json(OrderFrameResponse { address }))
}

/// GET /images
pub async fn list_images<D, R, U, A>(
    State(state): State<GalleryAppState<D, R, U, A>>,
    tokens: SessionTokens,
) -> GalleryResult<Dispatched<Json<Vec<Image>>>>
where
    D: DiscoveryResolver + Clone + Send + Sync + 'static,
    R: TokenRevoker + Clone + Send + Sync + 'static,
    U: UserInfoClient + Clone + Send + Sync + 'static,
    A: ImageApi + Clone + Send + Sync + 'static,
{
    let images = state
        .images()
        .list_images(tokens.access_token.as_ref())
        .await?;

    Ok(images.map(Json))
}

/// DELETE /images/{id}
pub async fn delete_image<D, R, U, A>(
    State(state): State<GalleryAppState<D, R, U, A>>,
    Path(id): Path<String>,
    tokens: SessionTokens,
) -> GalleryResult<Dispatched<Redirect>>
where
    D: DiscoveryResolver + Clone + Send + Sync + 'static,
    R: TokenRevoker + Clone + Send + Sync + 'static,
    U: UserInfoClient + Clone + Send + Sync + 'static,
    A: ImageApi + Clone + Send + Sync + 'static,
{
    let deleted = state
        .images()
        .delete_image(&id, tokens.access_token.as_ref())
        .await?;

    Ok(deleted.map(|()| Redirect::to(IMAGES_INDEX)))
}
