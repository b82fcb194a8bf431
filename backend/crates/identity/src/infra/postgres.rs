//! PostgreSQL Repository Implementation
//!
//! Reads the user store populated by the identity provider's account
//! management. Expected relations:
//! - `users (subject_id TEXT PRIMARY KEY, is_active BOOLEAN NOT NULL)`
//! - `user_claims (subject_id TEXT REFERENCES users, claim_type TEXT, claim_value TEXT)`

use sqlx::PgPool;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::{claim::Claim, subject::Subject};
use crate::error::IdentityResult;

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Round-trip to the database, for readiness checks
    pub async fn ping(&self) -> IdentityResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

impl UserRepository for PgUserRepository {
    async fn find_claims(&self, subject: &Subject) -> IdentityResult<Option<Vec<Claim>>> {
        // One statement, so existence and claims come from the same snapshot
        let rows = sqlx::query_as::<_, ClaimRow>(
            r#"
            SELECT
                c.claim_type,
                c.claim_value
            FROM users u
            LEFT JOIN user_claims c ON c.subject_id = u.subject_id
            WHERE u.subject_id = $1
            "#,
        )
        .bind(subject.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(claims_from_rows(rows))
    }

    async fn is_active(&self, subject: &Subject) -> IdentityResult<bool> {
        let active = sqlx::query_scalar::<_, bool>(
            "SELECT is_active FROM users WHERE subject_id = $1",
        )
        .bind(subject.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(active.unwrap_or(false))
    }
}

// ============================================================================
// Row types
// ============================================================================

/// One row per stored claim, or a single all-NULL row for a user without claims
#[derive(sqlx::FromRow)]
struct ClaimRow {
    claim_type: Option<String>,
    claim_value: Option<String>,
}

/// No rows means no such user
fn claims_from_rows(rows: Vec<ClaimRow>) -> Option<Vec<Claim>> {
    if rows.is_empty() {
        return None;
    }

    Some(
        rows.into_iter()
            .filter_map(|row| {
                let claim_type = row.claim_type?;
                Some(Claim::new(claim_type, row.claim_value.unwrap_or_default()))
            })
            .collect(),
    )
}
