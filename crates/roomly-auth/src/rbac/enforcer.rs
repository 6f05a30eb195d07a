//! RBAC enforcement — admin gate over the closed role enum.

use roomly_core::error::AppError;
use roomly_entity::user::UserRole;

/// Rejection message for non-admin callers of admin operations.
pub const ADMIN_REQUIRED: &str = "Admin access required";

/// Enforces role requirements for privileged operations.
///
/// Stateless; layered strictly after authentication so the caller's role
/// is always resolved from a live identity.
#[derive(Debug, Clone)]
pub struct RbacEnforcer;

impl RbacEnforcer {
    /// Creates a new enforcer.
    pub fn new() -> Self {
        Self
    }

    /// Checks that the given role has admin privileges.
    ///
    /// Returns `Ok(())` if allowed, or an authorization fault if denied.
    pub fn require_admin(&self, role: &UserRole) -> Result<(), AppError> {
        match role {
            UserRole::Admin => Ok(()),
            UserRole::User => Err(AppError::authorization(ADMIN_REQUIRED)),
        }
    }

    /// Returns whether the role is an admin.
    pub fn is_admin(&self, role: &UserRole) -> bool {
        role.is_admin()
    }
}

impl Default for RbacEnforcer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomly_core::ErrorKind;

    #[test]
    fn test_admin_passes() {
        assert!(RbacEnforcer::new().require_admin(&UserRole::Admin).is_ok());
    }

    #[test]
    fn test_user_is_denied() {
        let err = RbacEnforcer::new()
            .require_admin(&UserRole::User)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
        assert_eq!(err.message, ADMIN_REQUIRED);
    }
}
