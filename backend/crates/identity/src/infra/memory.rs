//! In-Memory User Repository
//!
//! Process-local user store for tests and embedded deployments.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::{claim::Claim, subject::Subject};
use crate::error::IdentityResult;

#[derive(Debug, Clone)]
struct StoredUser {
    is_active: bool,
    claims: Vec<Claim>,
}

/// In-memory user repository
///
/// Clones share the same underlying map, so a test can flip a user's
/// activity after handing the repository to a resolver.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Subject, StoredUser>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user record
    pub async fn upsert(&self, subject: Subject, is_active: bool, claims: Vec<Claim>) {
        self.users
            .write()
            .await
            .insert(subject, StoredUser { is_active, claims });
    }

    /// Change the activity flag; returns false if the subject is unknown
    pub async fn set_active(&self, subject: &Subject, is_active: bool) -> bool {
        match self.users.write().await.get_mut(subject) {
            Some(user) => {
                user.is_active = is_active;
                true
            }
            None => false,
        }
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn find_claims(&self, subject: &Subject) -> IdentityResult<Option<Vec<Claim>>> {
        Ok(self
            .users
            .read()
            .await
            .get(subject)
            .map(|user| user.claims.clone()))
    }

    async fn is_active(&self, subject: &Subject) -> IdentityResult<bool> {
        Ok(self
            .users
            .read()
            .await
            .get(subject)
            .is_some_and(|user| user.is_active))
    }
}
