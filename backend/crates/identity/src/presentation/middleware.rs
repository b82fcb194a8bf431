//! Client Authentication Middleware
//!
//! Profile routes are served only to the registered relying party.

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::ProfileConfig;
use crate::error::IdentityError;

/// Middleware that requires the relying party's HTTP Basic credentials
pub async fn require_client_credentials(
    config: Arc<ProfileConfig>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    if !config.relying_party.verify(req.headers()) {
        return Err(IdentityError::Unauthorized.into_response());
    }

    Ok(next.run(req).await)
}
