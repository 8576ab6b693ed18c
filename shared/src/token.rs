//! Bearer token claims
//!
//! The client reads the token payload only to learn who is logged in.
//! Signatures are never checked here; the backend verifies every request.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{Role, User};

/// Claims carried in the token payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Username
    pub sub: String,
    /// Comma-separated `ROLE_*` authorities
    #[serde(default)]
    pub roles: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Expiry, seconds since the Unix epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl TokenClaims {
    pub fn role(&self) -> Role {
        Role::from_authorities(&self.roles)
    }

    pub fn user(&self) -> User {
        User {
            username: self.sub.clone(),
            role: self.role(),
        }
    }

    /// Whether `exp` lies before `now` (seconds). Tokens without `exp` never expire here.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp.is_some_and(|exp| exp <= now)
    }
}

/// Decode the payload segment of `header.payload.signature`
pub fn decode_claims(token: &str) -> AppResult<TokenClaims> {
    let mut parts = token.trim().split('.');
    let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return Err(AppError::invalid_token("Token must have three segments")),
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| AppError::invalid_token(format!("Token payload is not base64url: {}", e)))?;

    let claims: TokenClaims = serde_json::from_slice(&bytes)
        .map_err(|e| AppError::invalid_token(format!("Token payload is not valid claims: {}", e)))?;

    if claims.sub.trim().is_empty() {
        return Err(AppError::invalid_token("Token has no subject"));
    }
    Ok(claims)
}

/// Decode the token and resolve the logged-in user
pub fn decode_user(token: &str) -> AppResult<User> {
    decode_claims(token).map(|claims| claims.user())
}
