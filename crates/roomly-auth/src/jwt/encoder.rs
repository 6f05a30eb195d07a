//! JWT token creation with configurable signing and TTL.

use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use uuid::Uuid;

use roomly_core::config::auth::AuthConfig;
use roomly_core::error::AppError;
use roomly_entity::user::User;

use super::claims::{AccessClaims, RefreshClaims};

/// Creates signed JWT access and refresh tokens.
///
/// The two token classes are signed with independent secrets so that
/// leaking one class cannot forge the other.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC key for access tokens.
    access_key: EncodingKey,
    /// HMAC key for refresh tokens.
    refresh_key: EncodingKey,
    /// Access token TTL in minutes.
    access_ttl_minutes: i64,
    /// Refresh token TTL in days.
    refresh_ttl_days: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("access_ttl_minutes", &self.access_ttl_minutes)
            .field("refresh_ttl_days", &self.refresh_ttl_days)
            .finish()
    }
}

/// An access + refresh token pair issued at login.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            access_key: EncodingKey::from_secret(config.access_token_secret.as_bytes()),
            refresh_key: EncodingKey::from_secret(config.refresh_token_secret.as_bytes()),
            access_ttl_minutes: config.access_token_ttl_minutes as i64,
            refresh_ttl_days: config.refresh_token_ttl_days as i64,
        }
    }

    /// Issues an access token embedding the user's identity claims.
    pub fn issue_access_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = now + chrono::Duration::minutes(self.access_ttl_minutes);

        let claims = AccessClaims {
            user_id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, &self.access_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))
    }

    /// Issues a refresh token carrying only the user id.
    pub fn issue_refresh_token(&self, user_id: Uuid) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = now + chrono::Duration::days(self.refresh_ttl_days);

        let claims = RefreshClaims {
            id: user_id,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, &self.refresh_key)
            .map_err(|e| AppError::internal(format!("Failed to encode refresh token: {e}")))
    }

    /// Issues a fresh access + refresh token pair for a login.
    pub fn issue_pair(&self, user: &User) -> Result<TokenPair, AppError> {
        Ok(TokenPair {
            access_token: self.issue_access_token(user)?,
            refresh_token: self.issue_refresh_token(user.id)?,
        })
    }
}
