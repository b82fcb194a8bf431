//! Profile Router

use axum::body::Body;
use axum::http::Request;
use axum::middleware::{self, Next};
use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::config::ProfileConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, ProfileAppState};
use crate::presentation::middleware::require_client_credentials;

/// Create the profile router with the PostgreSQL repository
pub fn profile_router(repo: PgUserRepository, config: ProfileConfig) -> Router {
    profile_router_generic(repo, config)
}

/// Create a profile router for any repository implementation
///
/// Every route requires the configured relying-party credentials.
pub fn profile_router_generic<R>(repo: R, config: ProfileConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let config = Arc::new(config);
    let state = ProfileAppState {
        repo: Arc::new(repo),
        config: config.clone(),
    };

    Router::new()
        .route("/profile/{subject}/claims", get(handlers::profile_claims::<R>))
        .route("/profile/{subject}/active", get(handlers::profile_active::<R>))
        .route_layer(middleware::from_fn(move |req: Request<Body>, next: Next| {
            require_client_credentials(config.clone(), req, next)
        }))
        .with_state(state)
}
