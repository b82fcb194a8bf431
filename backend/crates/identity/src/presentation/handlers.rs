//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use std::sync::Arc;

use crate::application::ClaimsProfileResolver;
use crate::application::config::ProfileConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::subject::Subject;
use crate::error::IdentityResult;
use crate::presentation::dto::{ActiveResponse, ProfileResponse};

/// Shared state for profile handlers
#[derive(Clone)]
pub struct ProfileAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<ProfileConfig>,
}

impl<R> ProfileAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    fn resolver(&self) -> ClaimsProfileResolver<R> {
        ClaimsProfileResolver::new(self.repo.clone(), self.config.clone())
    }
}

/// GET /profile/{subject}/claims
pub async fn profile_claims<R>(
    State(state): State<ProfileAppState<R>>,
    Path(subject): Path<String>,
) -> IdentityResult<Json<ProfileResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let subject = Subject::parse_str(&subject)?;
    let claims = state.resolver().issue_profile(&subject).await?;

    Ok(Json(ProfileResponse {
        subject: subject.into_inner(),
        claims,
    }))
}

/// GET /profile/{subject}/active
pub async fn profile_active<R>(
    State(state): State<ProfileAppState<R>>,
    Path(subject): Path<String>,
) -> IdentityResult<Json<ActiveResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let subject = Subject::parse_str(&subject)?;
    let is_active = state.resolver().is_active(&subject).await?;

    Ok(Json(ActiveResponse {
        subject: subject.into_inner(),
        is_active,
    }))
}
