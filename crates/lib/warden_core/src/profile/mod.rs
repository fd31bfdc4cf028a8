//! Profile resource management.
//!
//! Plain CRUD over profile records. Independent of identities and sessions.

pub mod memory;
pub mod queries;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use crate::models::profile::{NewProfile, Profile, ProfilePatch};

/// Profile errors.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Profile with ID {0} not found")]
    NotFound(i64),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    DbError(#[from] sqlx::Error),
}

/// Storage backend for profile records. Missing ids come back as `None`/`false`.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn create(&self, profile: &NewProfile) -> Result<Profile, ProfileError>;

    /// All profiles, ordered by id.
    async fn list(&self) -> Result<Vec<Profile>, ProfileError>;

    async fn get(&self, id: i64) -> Result<Option<Profile>, ProfileError>;

    async fn update(&self, id: i64, patch: &ProfilePatch) -> Result<Option<Profile>, ProfileError>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, ProfileError>;
}

/// Validates input and turns missing records into [`ProfileError::NotFound`].
#[derive(Clone)]
pub struct ProfileService {
    repo: Arc<dyn ProfileRepository>,
}

impl ProfileService {
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, profile: &NewProfile) -> Result<Profile, ProfileError> {
        validate_name(&profile.name)?;
        validate_age(profile.age)?;
        let created = self.repo.create(profile).await?;
        info!(id = created.id, "profile created");
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<Profile>, ProfileError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: i64) -> Result<Profile, ProfileError> {
        self.repo.get(id).await?.ok_or(ProfileError::NotFound(id))
    }

    pub async fn update(&self, id: i64, patch: &ProfilePatch) -> Result<Profile, ProfileError> {
        if let Some(name) = &patch.name {
            validate_name(name)?;
        }
        if let Some(age) = patch.age {
            validate_age(age)?;
        }
        self.repo
            .update(id, patch)
            .await?
            .ok_or(ProfileError::NotFound(id))
    }

    pub async fn delete(&self, id: i64) -> Result<(), ProfileError> {
        if !self.repo.delete(id).await? {
            return Err(ProfileError::NotFound(id));
        }
        info!(id, "profile deleted");
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), ProfileError> {
    if name.trim().is_empty() {
        return Err(ProfileError::Validation("name must not be empty".into()));
    }
    Ok(())
}

fn validate_age(age: i32) -> Result<(), ProfileError> {
    if age < 0 {
        return Err(ProfileError::Validation("age must not be negative".into()));
    }
    Ok(())
}
