//! Authentication logic.
//!
//! Provides password hashing, JWT management, identity persistence and the
//! session issuer that ties them together.

pub mod credentials;
pub mod jwt;
pub mod memory;
pub mod password;
pub mod queries;
pub mod session;
pub mod store;

use thiserror::Error;

pub use credentials::CredentialStore;
pub use session::{SessionIssuer, SessionToken};
pub use store::IdentityStore;

/// Authentication errors.
///
/// Unknown email and wrong password are kept as separate kinds.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Email already registered")]
    DuplicateIdentity,

    #[error("Email not found")]
    IdentityNotFound,

    #[error("Invalid password")]
    InvalidCredential,

    #[error("Invalid token: {0}")]
    TokenInvalid(String),

    #[error("Subject not found")]
    SubjectNotFound,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DbError(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
