//! Refresh-token slot persistence wrapping the user repository.

use std::sync::Arc;

use uuid::Uuid;

use roomly_core::error::AppError;
use roomly_database::repositories::UserRepository;

/// Persists the single currently-valid refresh token per user.
///
/// The slot lives on the user record itself. Recording a new token
/// overwrites the previous value, which is the revocation mechanism: an
/// older refresh token stops matching the slot even while it is still
/// cryptographically valid and unexpired.
#[derive(Debug, Clone)]
pub struct SessionStore {
    /// User database repository holding the slot.
    users: Arc<UserRepository>,
}

impl SessionStore {
    /// Creates a new session store.
    pub fn new(users: Arc<UserRepository>) -> Self {
        Self { users }
    }

    /// Records the user's current refresh token, replacing any previous one.
    pub async fn record_refresh_token(&self, user_id: Uuid, token: &str) -> Result<(), AppError> {
        self.users
            .update_refresh_token(user_id, token)
            .await
            .map_err(|e| AppError::internal(format!("Failed to record refresh token: {e}")))
    }

    /// Reads the user's currently-recorded refresh token, if any.
    pub async fn get_refresh_token(&self, user_id: Uuid) -> Result<Option<String>, AppError> {
        self.users
            .get_refresh_token(user_id)
            .await
            .map_err(|e| AppError::internal(format!("Failed to read refresh token: {e}")))
    }
}
