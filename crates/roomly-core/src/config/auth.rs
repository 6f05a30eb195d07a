//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and token-signing configuration.
///
/// Access and refresh tokens are signed with independent secrets so that
/// leaking one token class does not allow forging the other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for access token signing (HMAC-SHA256).
    #[serde(default = "default_access_secret")]
    pub access_token_secret: String,
    /// Secret key for refresh token signing (HMAC-SHA256).
    #[serde(default = "default_refresh_secret")]
    pub refresh_token_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_token_ttl_minutes: u64,
    /// Refresh token TTL in days.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_token_ttl_days: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_token_secret: default_access_secret(),
            refresh_token_secret: default_refresh_secret(),
            access_token_ttl_minutes: default_access_ttl(),
            refresh_token_ttl_days: default_refresh_ttl(),
        }
    }
}

fn default_access_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_refresh_secret() -> String {
    "CHANGE_ME_TOO_IN_PRODUCTION".to_string()
}

fn default_access_ttl() -> u64 {
    15
}

fn default_refresh_ttl() -> u64 {
    7
}
