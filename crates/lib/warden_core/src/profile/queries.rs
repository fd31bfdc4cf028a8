//! PostgreSQL-backed profile repository.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{ProfileError, ProfileRepository};
use crate::models::profile::{NewProfile, Profile, ProfilePatch};

/// Profile repository over the `profiles` table.
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    async fn create(&self, profile: &NewProfile) -> Result<Profile, ProfileError> {
        let row = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (name, age, tags)
            VALUES ($1, $2, $3)
            RETURNING id, name, age, tags, created_at, updated_at
            "#,
        )
        .bind(&profile.name)
        .bind(profile.age)
        .bind(&profile.tags)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list(&self) -> Result<Vec<Profile>, ProfileError> {
        let rows = sqlx::query_as::<_, Profile>(
            "SELECT id, name, age, tags, created_at, updated_at FROM profiles ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> Result<Option<Profile>, ProfileError> {
        let row = sqlx::query_as::<_, Profile>(
            "SELECT id, name, age, tags, created_at, updated_at FROM profiles WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: i64, patch: &ProfilePatch) -> Result<Option<Profile>, ProfileError> {
        let row = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET name = COALESCE($2, name),
                age = COALESCE($3, age),
                tags = COALESCE($4, tags),
                updated_at = now()
            WHERE id = $1
            RETURNING id, name, age, tags, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.age)
        .bind(patch.tags.as_deref())
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<bool, ProfileError> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
