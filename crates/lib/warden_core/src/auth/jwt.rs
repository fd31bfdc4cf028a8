//! JWT token generation and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use super::AuthError;
use crate::models::auth::TokenClaims;

/// Default session token lifetime: 1 hour.
pub const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 60 * 60;

/// Build the claims for a token issued now and valid for `lifetime`.
pub fn issue_claims(user_id: Uuid, email: &str, lifetime: Duration) -> TokenClaims {
    let now = Utc::now();
    TokenClaims {
        sub: user_id.to_string(),
        email: email.to_string(),
        iat: now.timestamp(),
        exp: (now + lifetime).timestamp(),
    }
}

/// Sign claims into an HS256 access token.
pub fn encode_access_token(claims: &TokenClaims, secret: &[u8]) -> Result<String, AuthError> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| AuthError::Internal(format!("jwt encode: {e}")))
}

/// Verify an access token's signature and expiry, returning its claims.
///
/// Expiry is checked with no leeway: a token is rejected the second it expires.
pub fn verify_access_token(token: &str, secret: &[u8]) -> Result<TokenClaims, AuthError> {
    let key = DecodingKey::from_secret(secret);
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 0;
    let claims = decode::<TokenClaims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|e| {
            let reason = match e.kind() {
                ErrorKind::ExpiredSignature => "token expired",
                ErrorKind::InvalidSignature => "signature mismatch",
                ErrorKind::InvalidAlgorithm => "unexpected algorithm",
                _ => "malformed token",
            };
            AuthError::TokenInvalid(reason.to_string())
        })?;
    // jsonwebtoken still accepts `exp == now`; valid means strictly before exp.
    if claims.exp <= Utc::now().timestamp() {
        return Err(AuthError::TokenInvalid("token expired".to_string()));
    }
    Ok(claims)
}
