//! Identity persistence seam.

use async_trait::async_trait;
use uuid::Uuid;

use super::AuthError;
use crate::models::auth::Identity;

/// Storage backend for identity records.
///
/// Implementations must enforce email uniqueness themselves: `insert` on an
/// existing email returns [`AuthError::DuplicateIdentity`] and writes nothing,
/// even when two inserts race.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Persist a new identity. The store assigns `id` and timestamps.
    async fn insert(&self, email: &str, password_hash: &str) -> Result<Identity, AuthError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, AuthError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Identity>, AuthError>;

    /// Cheap liveness probe for health reporting.
    async fn ping(&self) -> bool {
        true
    }
}
