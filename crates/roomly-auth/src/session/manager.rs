//! Login and refresh flows coordinating the credential verifier, token
//! authority, and session store.

use std::sync::Arc;

use tracing::{info, warn};

use roomly_core::error::AppError;
use roomly_database::repositories::UserRepository;
use roomly_entity::user::User;

use crate::jwt::encoder::TokenPair;
use crate::jwt::{JwtDecoder, JwtEncoder};
use crate::password::PasswordHasher;

use super::store::SessionStore;

/// Generic rejection for a login credential mismatch.
///
/// "No such email" and "wrong password" intentionally collapse into one
/// message to prevent account enumeration.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Rejection for a refresh token that no longer matches the stored slot.
///
/// Covers forged, superseded, and cleared tokens alike.
pub const REFRESH_TOKEN_REVOKED: &str = "Refresh token revoked";

/// Coordinates the end-to-end login and refresh flows.
#[derive(Clone)]
pub struct SessionManager {
    /// JWT encoder for token issuance.
    jwt_encoder: Arc<JwtEncoder>,
    /// JWT decoder for refresh-token validation.
    jwt_decoder: Arc<JwtDecoder>,
    /// Refresh-token slot persistence.
    session_store: Arc<SessionStore>,
    /// User repository for identity resolution.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    password_hasher: Arc<PasswordHasher>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager").finish()
    }
}

impl SessionManager {
    /// Creates a new session manager with all required dependencies.
    pub fn new(
        jwt_encoder: Arc<JwtEncoder>,
        jwt_decoder: Arc<JwtDecoder>,
        session_store: Arc<SessionStore>,
        user_repo: Arc<UserRepository>,
        password_hasher: Arc<PasswordHasher>,
    ) -> Self {
        Self {
            jwt_encoder,
            jwt_decoder,
            session_store,
            user_repo,
            password_hasher,
        }
    }

    /// Performs the complete login flow:
    ///
    /// 1. Resolve the identity by email
    /// 2. Verify the password
    /// 3. Issue an access + refresh token pair
    /// 4. Record the refresh token, revoking any previous one
    ///
    /// Credential mismatches reject with one generic message; store and
    /// hashing faults surface as internal faults, never as rejections.
    pub async fn login(&self, email: &str, password: &str) -> Result<(TokenPair, User), AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await
            .map_err(|e| AppError::internal(format!("Failed to query the database: {e}")))?
            .ok_or_else(|| AppError::bad_request(INVALID_CREDENTIALS))?;

        let password_valid = self.password_hasher.verify(password, &user.password_hash)?;

        if !password_valid {
            warn!(user_id = %user.id, "Login rejected: password mismatch");
            return Err(AppError::bad_request(INVALID_CREDENTIALS));
        }

        let tokens = self.jwt_encoder.issue_pair(&user)?;

        self.session_store
            .record_refresh_token(user.id, &tokens.refresh_token)
            .await?;

        info!(user_id = %user.id, "Login successful");

        Ok((tokens, user))
    }

    /// Performs the refresh flow:
    ///
    /// 1. Verify the refresh token's signature and expiry
    /// 2. Resolve the claimed user id to a live identity
    /// 3. Compare the presented token to the stored slot by exact equality
    /// 4. Issue a new access token
    ///
    /// The refresh token itself is not rotated; the slot recorded at
    /// login stays valid until the next login overwrites it.
    pub async fn refresh(&self, refresh_token: &str) -> Result<String, AppError> {
        let claims = self.jwt_decoder.decode_refresh_token(refresh_token)?;

        let user = self
            .user_repo
            .find_by_id(claims.id)
            .await
            .map_err(|e| AppError::internal(format!("Failed to query the database: {e}")))?
            .ok_or_else(|| AppError::authentication(REFRESH_TOKEN_REVOKED))?;

        let stored = self.session_store.get_refresh_token(user.id).await?;

        if stored.as_deref() != Some(refresh_token) {
            warn!(user_id = %user.id, "Refresh rejected: token does not match stored slot");
            return Err(AppError::authentication(REFRESH_TOKEN_REVOKED));
        }

        let access_token = self.jwt_encoder.issue_access_token(&user)?;

        info!(user_id = %user.id, "Access token refreshed");

        Ok(access_token)
    }
}
