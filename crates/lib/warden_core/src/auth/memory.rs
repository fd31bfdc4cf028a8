//! In-memory identity store.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use super::AuthError;
use super::store::IdentityStore;
use crate::models::auth::Identity;
use crate::uuid::uuidv7;

/// Identity store held in process memory.
///
/// Records are keyed by email; the map entry lock makes check-and-insert a
/// single atomic step.
#[derive(Default)]
pub struct MemoryIdentityStore {
    by_email: DashMap<String, Identity>,
    email_by_id: DashMap<Uuid, String>,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored identities.
    pub fn len(&self) -> usize {
        self.by_email.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_email.is_empty()
    }

    /// Remove an identity out-of-band, returning it if present.
    pub fn remove(&self, id: Uuid) -> Option<Identity> {
        let (_, email) = self.email_by_id.remove(&id)?;
        self.by_email.remove(&email).map(|(_, identity)| identity)
    }
}

#[async_trait]
impl IdentityStore for MemoryIdentityStore {
    async fn insert(&self, email: &str, password_hash: &str) -> Result<Identity, AuthError> {
        match self.by_email.entry(email.to_string()) {
            Entry::Occupied(_) => Err(AuthError::DuplicateIdentity),
            Entry::Vacant(slot) => {
                let now = Utc::now();
                let identity = Identity {
                    id: uuidv7(),
                    email: email.to_string(),
                    password_hash: password_hash.to_string(),
                    created_at: now,
                    updated_at: now,
                };
                self.email_by_id.insert(identity.id, identity.email.clone());
                slot.insert(identity.clone());
                Ok(identity)
            }
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, AuthError> {
        Ok(self.by_email.get(email).map(|r| r.value().clone()))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Identity>, AuthError> {
        let Some(email) = self.email_by_id.get(&id).map(|r| r.value().clone()) else {
            return Ok(None);
        };
        Ok(self.by_email.get(&email).map(|r| r.value().clone()))
    }
}
