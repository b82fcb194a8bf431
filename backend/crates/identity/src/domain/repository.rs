//! Repository Traits
//!
//! Interfaces for the user store. Implementations are in the infrastructure
//! layer; the store itself (schema, migrations, seeding) is owned elsewhere.

use crate::domain::value_object::{claim::Claim, subject::Subject};
use crate::error::IdentityResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Claims stored for the subject.
    ///
    /// `Ok(None)` means the subject has no record; `Ok(Some(vec![]))` is a
    /// known subject without claims.
    async fn find_claims(&self, subject: &Subject) -> IdentityResult<Option<Vec<Claim>>>;

    /// Live activity flag. Unknown subjects are not active.
    async fn is_active(&self, subject: &Subject) -> IdentityResult<bool>;
}
