//! Credential store: registration and identity lookup.

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use super::AuthError;
use super::password::hash_password;
use super::store::IdentityStore;
use crate::models::auth::Identity;

/// Registers identities and looks them up, hashing passwords on the way in.
#[derive(Clone)]
pub struct CredentialStore {
    store: Arc<dyn IdentityStore>,
}

impl CredentialStore {
    pub fn new(store: Arc<dyn IdentityStore>) -> Self {
        Self { store }
    }

    /// Register a new identity.
    ///
    /// The pre-check only saves a bcrypt round on the common duplicate case;
    /// the store's own uniqueness guarantee is what holds under races.
    pub async fn register(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        validate_credentials(email, password)?;

        if self.store.find_by_email(email).await?.is_some() {
            debug!(email, "registration rejected: email exists");
            return Err(AuthError::DuplicateIdentity);
        }

        let password_hash = hash_password(password)?;
        let identity = self.store.insert(email, &password_hash).await?;
        info!(id = %identity.id, email, "identity registered");
        Ok(identity)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, AuthError> {
        self.store.find_by_email(email).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Identity>, AuthError> {
        self.store.find_by_id(id).await
    }

    /// Whether the backing store is reachable.
    pub async fn ping(&self) -> bool {
        self.store.ping().await
    }
}

/// Email and password must both be non-blank.
pub(crate) fn validate_credentials(email: &str, password: &str) -> Result<(), AuthError> {
    if email.trim().is_empty() {
        return Err(AuthError::ValidationError("email must not be empty".into()));
    }
    if password.is_empty() {
        return Err(AuthError::ValidationError("password must not be empty".into()));
    }
    Ok(())
}
