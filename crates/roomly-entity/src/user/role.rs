//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the system.
///
/// Modeled as a closed enum rather than a free-form string so that the
/// admin gate's check is exhaustive and compiler-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    /// Regular user: may manage their own bookings.
    User,
    /// Administrator: may additionally manage rooms and create users.
    Admin,
}

impl UserRole {
    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the role as its uppercase wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = roomly_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Self::User),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(roomly_core::AppError::field_validation(
                "role",
                "role must be either USER or ADMIN",
            )),
        }
    }
}

impl Default for UserRole {
    fn default() -> Self {
        Self::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("USER".parse::<UserRole>().unwrap(), UserRole::User);
        assert_eq!("ADMIN".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert!("admin".parse::<UserRole>().is_err());
        assert!("MANAGER".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_wire_format() {
        assert_eq!(
            serde_json::to_string(&UserRole::Admin).unwrap(),
            "\"ADMIN\""
        );
        assert_eq!(UserRole::User.to_string(), "USER");
    }

    #[test]
    fn test_is_admin() {
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::User.is_admin());
    }
}
