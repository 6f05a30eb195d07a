//! JWT token validation.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use roomly_core::config::auth::AuthConfig;
use roomly_core::error::AppError;

use super::claims::{AccessClaims, RefreshClaims};

/// Rejection message for access tokens that fail verification.
pub const INVALID_ACCESS_TOKEN: &str = "Invalid token";

/// Rejection message for refresh tokens that fail verification.
pub const INVALID_REFRESH_TOKEN: &str = "Invalid or expired refresh token";

/// Validates JWT tokens against the per-class secrets.
///
/// Every failure mode (bad signature, malformed token, expiry) collapses
/// to a single message per token class so callers cannot distinguish a
/// forged token from an expired one.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC key for access tokens.
    access_key: DecodingKey,
    /// HMAC key for refresh tokens.
    refresh_key: DecodingKey,
    /// Shared validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // seconds of clock-skew tolerance

        Self {
            access_key: DecodingKey::from_secret(config.access_token_secret.as_bytes()),
            refresh_key: DecodingKey::from_secret(config.refresh_token_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token.
    pub fn decode_access_token(&self, token: &str) -> Result<AccessClaims, AppError> {
        decode::<AccessClaims>(token, &self.access_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::authentication(INVALID_ACCESS_TOKEN))
    }

    /// Decodes and validates a refresh token.
    pub fn decode_refresh_token(&self, token: &str) -> Result<RefreshClaims, AppError> {
        decode::<RefreshClaims>(token, &self.refresh_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::authentication(INVALID_REFRESH_TOKEN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use chrono::Utc;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use roomly_entity::user::{User, UserRole};
    use uuid::Uuid;

    fn test_config() -> AuthConfig {
        AuthConfig {
            access_token_secret: "access-secret-for-tests".to_string(),
            refresh_token_secret: "refresh-secret-for-tests".to_string(),
            access_token_ttl_minutes: 15,
            refresh_token_ttl_days: 7,
        }
    }

    fn test_user() -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "unused".to_string(),
            role: UserRole::User,
            refresh_token: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_access_token_round_trip() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);
        let user = test_user();

        let token = encoder.issue_access_token(&user).unwrap();
        let claims = decoder.decode_access_token(&token).unwrap();

        assert_eq!(claims.user_id, user.id);
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.first_name, "Ada");
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }

    #[test]
    fn test_refresh_token_round_trip() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);
        let user_id = Uuid::new_v4();

        let token = encoder.issue_refresh_token(user_id).unwrap();
        let claims = decoder.decode_refresh_token(&token).unwrap();

        assert_eq!(claims.id, user_id);
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let user = test_user();

        let mut other = test_config();
        other.access_token_secret = "a-different-secret".to_string();
        let decoder = JwtDecoder::new(&other);

        let token = encoder.issue_access_token(&user).unwrap();
        let err = decoder.decode_access_token(&token).unwrap_err();
        assert_eq!(err.message, INVALID_ACCESS_TOKEN);
    }

    #[test]
    fn test_token_classes_are_not_interchangeable() {
        // A refresh token must not verify as an access token even though
        // both are HS256 JWTs: the secrets differ.
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let refresh = encoder.issue_refresh_token(Uuid::new_v4()).unwrap();
        assert!(decoder.decode_access_token(&refresh).is_err());

        let access = encoder.issue_access_token(&test_user()).unwrap();
        assert!(decoder.decode_refresh_token(&access).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let config = test_config();
        let decoder = JwtDecoder::new(&config);

        let now = Utc::now().timestamp();
        let claims = RefreshClaims {
            id: Uuid::new_v4(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let key = EncodingKey::from_secret(config.refresh_token_secret.as_bytes());
        let token = encode(&Header::default(), &claims, &key).unwrap();

        let err = decoder.decode_refresh_token(&token).unwrap_err();
        assert_eq!(err.message, INVALID_REFRESH_TOKEN);
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let decoder = JwtDecoder::new(&test_config());
        assert!(decoder.decode_access_token("not.a.jwt").is_err());
        assert!(decoder.decode_refresh_token("").is_err());
    }
}
