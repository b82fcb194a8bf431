//! Claims Profile Use Case
//!
//! Projects the user store's claim set into the profile data an identity
//! token or userinfo response carries, and answers activity checks.

use std::sync::Arc;

use platform::client::with_deadline;

use crate::application::config::ProfileConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{claim::Claim, subject::Subject};
use crate::error::{IdentityError, IdentityResult};

/// Claims profile resolver
///
/// A pure projection: claims come back exactly as stored, with no filtering,
/// renaming, or deduplication. Activity is never cached.
pub struct ClaimsProfileResolver<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<ProfileConfig>,
}

impl<U> ClaimsProfileResolver<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<ProfileConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Claims stored for `subject`.
    ///
    /// ## Returns
    /// * `Ok(claims)` - The stored claims, possibly empty
    /// * `Err(IdentityError::SubjectNotFound)` - The subject has no record
    pub async fn resolve_claims(&self, subject: &Subject) -> IdentityResult<Vec<Claim>> {
        let claims = with_deadline(
            self.config.repository_deadline,
            self.user_repo.find_claims(subject),
        )
        .await??
        .ok_or(IdentityError::SubjectNotFound)?;

        for claim in &claims {
            tracing::debug!(subject = %subject, claim_type = %claim.claim_type, "Resolved claim");
        }

        Ok(claims)
    }

    /// Whether `subject` may currently authenticate.
    pub async fn is_active(&self, subject: &Subject) -> IdentityResult<bool> {
        let active = with_deadline(
            self.config.repository_deadline,
            self.user_repo.is_active(subject),
        )
        .await??;

        tracing::debug!(subject = %subject, active, "Checked subject activity");
        Ok(active)
    }

    /// Claims to issue to a relying party.
    ///
    /// Activity is checked first; an inactive subject gets no claims at all.
    pub async fn issue_profile(&self, subject: &Subject) -> IdentityResult<Vec<Claim>> {
        if !self.is_active(subject).await? {
            return Err(IdentityError::AccountInactive);
        }

        let claims = self.resolve_claims(subject).await?;

        tracing::info!(subject = %subject, claims = claims.len(), "Issued profile claims");
        Ok(claims)
    }
}
