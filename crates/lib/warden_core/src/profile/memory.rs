//! In-memory profile repository.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use super::{ProfileError, ProfileRepository};
use crate::models::profile::{NewProfile, Profile, ProfilePatch};

/// Profiles held in process memory with sequential ids starting at 1.
pub struct MemoryProfileRepository {
    profiles: DashMap<i64, Profile>,
    next_id: AtomicI64,
}

impl MemoryProfileRepository {
    pub fn new() -> Self {
        Self {
            profiles: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryProfileRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileRepository for MemoryProfileRepository {
    async fn create(&self, profile: &NewProfile) -> Result<Profile, ProfileError> {
        let now = Utc::now();
        let record = Profile {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            name: profile.name.clone(),
            age: profile.age,
            tags: profile.tags.clone(),
            created_at: now,
            updated_at: now,
        };
        self.profiles.insert(record.id, record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<Profile>, ProfileError> {
        let mut all: Vec<Profile> = self.profiles.iter().map(|r| r.value().clone()).collect();
        all.sort_by_key(|p| p.id);
        Ok(all)
    }

    async fn get(&self, id: i64) -> Result<Option<Profile>, ProfileError> {
        Ok(self.profiles.get(&id).map(|r| r.value().clone()))
    }

    async fn update(&self, id: i64, patch: &ProfilePatch) -> Result<Option<Profile>, ProfileError> {
        let Some(mut entry) = self.profiles.get_mut(&id) else {
            return Ok(None);
        };
        patch.apply_to(entry.value_mut());
        entry.updated_at = Utc::now();
        Ok(Some(entry.value().clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, ProfileError> {
        Ok(self.profiles.remove(&id).is_some())
    }
}
