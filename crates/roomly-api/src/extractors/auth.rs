//! `AuthUser` extractor — the authentication gate.
//!
//! Pulls the bearer token from the Authorization header, validates it,
//! resolves the live identity, and injects it into the handler. Checks
//! run in a fixed order and each failure is a terminal rejection:
//!
//! 1. missing / non-`Bearer` header
//! 2. empty token after the prefix
//! 3. signature/expiry verification
//! 4. identity resolution (a repository *error* here is an internal
//!    fault, not an authentication rejection)

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use uuid::Uuid;

use roomly_core::error::AppError;
use roomly_entity::user::UserRole;

use crate::state::AppState;

/// Rejection for a missing or malformed Authorization header.
pub const MALFORMED_AUTH_HEADER: &str = "Authorization header must be in format: Bearer <token>";

/// Rejection for a Bearer prefix followed by nothing.
pub const MISSING_TOKEN: &str = "Token is missing";

/// Rejection for a token whose subject no longer resolves to a user.
pub const USER_NOT_FOUND: &str = "user not found";

/// The authenticated identity attached to a request.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// User id.
    pub id: Uuid,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Role, for the authorization gate.
    pub role: UserRole,
}

/// Extracts the bearer token from an Authorization header value.
///
/// Kept as a free function so the rejection ordering is unit-testable:
/// an empty token must reject as missing, never as invalid.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AppError> {
    let header = header.ok_or_else(|| AppError::authentication(MALFORMED_AUTH_HEADER))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::authentication(MALFORMED_AUTH_HEADER))?
        .trim();

    if token.is_empty() {
        return Err(AppError::authentication(MISSING_TOKEN));
    }

    Ok(token)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        let token = bearer_token(header)?;

        let claims = state.jwt_decoder.decode_access_token(token)?;

        // A store error here must be told apart from "no such user".
        let user = state
            .user_repo
            .find_by_id(claims.user_id)
            .await
            .map_err(|e| AppError::internal(format!("Failed to resolve user: {e}")))?
            .ok_or_else(|| AppError::authentication(USER_NOT_FOUND))?;

        Ok(AuthUser {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            role: user.role,
        })
    }
}

/// An authenticated identity that also passed the admin gate.
///
/// Extractor composition guarantees the gates run in order: the role
/// check can only execute over an identity the authentication gate
/// already resolved.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthUser);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        state.rbac_enforcer.require_admin(&auth.role)?;
        Ok(AdminUser(auth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_header_is_malformed() {
        let err = bearer_token(None).unwrap_err();
        assert_eq!(err.message, MALFORMED_AUTH_HEADER);
    }

    #[test]
    fn test_non_bearer_header_is_malformed() {
        let err = bearer_token(Some("Basic dXNlcjpwYXNz")).unwrap_err();
        assert_eq!(err.message, MALFORMED_AUTH_HEADER);

        // No space after the scheme is malformed, not missing.
        let err = bearer_token(Some("Bearer")).unwrap_err();
        assert_eq!(err.message, MALFORMED_AUTH_HEADER);
    }

    #[test]
    fn test_empty_token_is_missing_not_invalid() {
        let err = bearer_token(Some("Bearer ")).unwrap_err();
        assert_eq!(err.message, MISSING_TOKEN);

        let err = bearer_token(Some("Bearer    ")).unwrap_err();
        assert_eq!(err.message, MISSING_TOKEN);
    }

    #[test]
    fn test_token_is_extracted() {
        assert_eq!(bearer_token(Some("Bearer abc.def.ghi")).unwrap(), "abc.def.ghi");
    }
}
