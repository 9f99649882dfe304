//! Password hashing, bearer tokens, and identity extractors.

use crate::error::ApiError;
use crate::state::AppState;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use staylist_core::Identity;
use staylist_error::{AuthError, AuthErrorKind, StaylistResult};
use staylist_interface::UserRecord;

/// Access token lifetime in hours.
const TOKEN_TTL_HOURS: i64 = 24;

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, the user id
    pub sub: String,
    /// Username at issue time
    pub username: String,
    /// Issued at, Unix epoch seconds
    pub iat: i64,
    /// Expiration, Unix epoch seconds
    pub exp: i64,
}

/// Signing and verification keys for bearer tokens.
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl std::fmt::Debug for JwtKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtKeys").finish_non_exhaustive()
    }
}

impl JwtKeys {
    /// Derive both keys from the configured secret.
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a signed token for a user.
    pub fn issue(&self, user: &UserRecord) -> StaylistResult<String> {
        let iat = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            iat,
            exp: iat + TOKEN_TTL_HOURS * 3600,
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AuthError::new(AuthErrorKind::InvalidToken(e.to_string())).into())
    }

    /// Verify a token and recover the acting identity.
    pub fn verify(&self, token: &str) -> StaylistResult<Identity> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(|e| AuthError::new(AuthErrorKind::InvalidToken(e.to_string())))?;
        let user_id = data
            .claims
            .sub
            .parse::<i64>()
            .map_err(|_| AuthError::new(AuthErrorKind::InvalidToken("bad subject".to_string())))?;
        Ok(Identity::new(user_id, data.claims.username))
    }
}

/// Hash a password for storage.
pub fn hash_password(password: &str) -> StaylistResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::new(AuthErrorKind::Hash(e.to_string())))?;
    Ok(hash.to_string())
}

/// Check a password against a stored hash.
pub fn verify_password(password: &str, stored: &str) -> StaylistResult<bool> {
    let parsed =
        PasswordHash::new(stored).map_err(|e| AuthError::new(AuthErrorKind::Hash(e.to_string())))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Extractor for endpoints that require an authenticated identity.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Identity);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .ok_or_else(|| ApiError::from(AuthError::new(AuthErrorKind::Required)))?;
        let identity = state.keys.verify(token)?;
        Ok(Self(identity))
    }
}

/// Extractor for endpoints that are open but personalize for callers.
///
/// A missing header yields `None`; a present but invalid token is still
/// rejected.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<Identity>);

#[async_trait]
impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match bearer_token(parts) {
            None => Ok(Self(None)),
            Some(token) => Ok(Self(Some(state.keys.verify(token)?))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hash = hash_password("correct horse battery").unwrap();
        assert!(verify_password("correct horse battery", &hash).unwrap());
        assert!(!verify_password("wrong password", &hash).unwrap());
    }

    #[test]
    fn issue_and_verify_token() {
        let keys = JwtKeys::new("test-secret");
        let user = UserRecord {
            id: 42,
            username: "ada".to_string(),
            avatar: None,
        };
        let token = keys.issue(&user).unwrap();
        let identity = keys.verify(&token).unwrap();
        assert_eq!(identity.user_id, 42);
        assert_eq!(identity.username, "ada");
    }

    #[test]
    fn tampered_token_is_rejected() {
        let keys = JwtKeys::new("test-secret");
        let other = JwtKeys::new("other-secret");
        let user = UserRecord {
            id: 1,
            username: "ada".to_string(),
            avatar: None,
        };
        let token = keys.issue(&user).unwrap();
        assert!(other.verify(&token).is_err());
    }
}
