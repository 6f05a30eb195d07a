//! JWT claim payloads for the two token classes.
//!
//! Access tokens carry enough identity to render responses without a
//! lookup; refresh tokens carry only the user id needed to resolve one.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims embedded in every access token.
///
/// Field names serialize in camelCase to match the wire format consumed
/// by clients (`userId`, `firstName`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessClaims {
    /// The authenticated user's id.
    pub user_id: Uuid,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

/// Claims embedded in every refresh token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// The user this token belongs to.
    pub id: Uuid,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}
