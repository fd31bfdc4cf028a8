//! Session issuer: login, token verification and subject resolution.

use chrono::Duration;
use tracing::{debug, info};
use uuid::Uuid;

use super::AuthError;
use super::credentials::{CredentialStore, validate_credentials};
use super::jwt::{encode_access_token, issue_claims, verify_access_token};
use super::password::verify_password;
use crate::models::auth::{Identity, TokenClaims};

/// A freshly minted bearer token.
#[derive(Debug, Clone)]
pub struct SessionToken {
    pub access_token: String,
    pub claims: TokenClaims,
}

impl SessionToken {
    /// Seconds between issuance and expiry.
    pub fn expires_in(&self) -> i64 {
        self.claims.exp - self.claims.iat
    }
}

/// Issues and verifies stateless session tokens.
///
/// Tokens live for a fixed `lifetime`; there is no renewal and no revocation.
#[derive(Clone)]
pub struct SessionIssuer {
    credentials: CredentialStore,
    secret: Vec<u8>,
    lifetime: Duration,
}

impl SessionIssuer {
    pub fn new(
        credentials: CredentialStore,
        secret: impl Into<Vec<u8>>,
        lifetime: Duration,
    ) -> Self {
        Self {
            credentials,
            secret: secret.into(),
            lifetime,
        }
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Authenticate with email + password and mint a token.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionToken, AuthError> {
        validate_credentials(email, password)?;

        let identity = match self.credentials.find_by_email(email).await? {
            Some(identity) => identity,
            None => {
                debug!(email, "login rejected: unknown email");
                return Err(AuthError::IdentityNotFound);
            }
        };

        if !verify_password(password, &identity.password_hash)? {
            debug!(id = %identity.id, "login rejected: wrong password");
            return Err(AuthError::InvalidCredential);
        }

        let claims = issue_claims(identity.id, &identity.email, self.lifetime);
        let access_token = encode_access_token(&claims, &self.secret)?;
        info!(id = %identity.id, "session issued");
        Ok(SessionToken {
            access_token,
            claims,
        })
    }

    /// Check signature and expiry, returning the claims.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        verify_access_token(token, &self.secret)
    }

    /// Re-read the identity a verified token points at.
    pub async fn identity_for(&self, claims: &TokenClaims) -> Result<Identity, AuthError> {
        let id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AuthError::TokenInvalid("malformed subject".into()))?;
        self.credentials
            .find_by_id(id)
            .await?
            .ok_or(AuthError::SubjectNotFound)
    }

    /// Verify a token and resolve its subject to the current identity record.
    pub async fn resolve_subject(&self, token: &str) -> Result<Identity, AuthError> {
        let claims = self.verify(token)?;
        self.identity_for(&claims).await
    }
}
