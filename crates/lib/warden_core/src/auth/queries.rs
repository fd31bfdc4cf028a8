//! PostgreSQL-backed identity store.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::AuthError;
use super::store::IdentityStore;
use crate::models::auth::Identity;
use crate::uuid::uuidv7;

/// Identity store over the `identities` table.
///
/// Uniqueness comes from the `identities_email_key` constraint, so concurrent
/// registrations of one email leave exactly one row.
#[derive(Clone)]
pub struct PgIdentityStore {
    pool: PgPool,
}

impl PgIdentityStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map an insert failure, turning a unique violation into `DuplicateIdentity`.
fn map_insert_error(e: sqlx::Error) -> AuthError {
    if let sqlx::Error::Database(db) = &e
        && db.is_unique_violation()
    {
        return AuthError::DuplicateIdentity;
    }
    AuthError::DbError(e)
}

#[async_trait]
impl IdentityStore for PgIdentityStore {
    async fn insert(&self, email: &str, password_hash: &str) -> Result<Identity, AuthError> {
        sqlx::query_as::<_, Identity>(
            "INSERT INTO identities (id, email, password_hash) VALUES ($1, $2, $3) \
             RETURNING id, email, password_hash, created_at, updated_at",
        )
        .bind(uuidv7())
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, AuthError> {
        let row = sqlx::query_as::<_, Identity>(
            "SELECT id, email, password_hash, created_at, updated_at \
             FROM identities WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Identity>, AuthError> {
        let row = sqlx::query_as::<_, Identity>(
            "SELECT id, email, password_hash, created_at, updated_at \
             FROM identities WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn ping(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}
