//! # roomly-auth
//!
//! Authentication and authorization for the Roomly booking backend.
//!
//! ## Modules
//!
//! - `jwt` — JWT token creation and validation, one secret per token class
//! - `password` — Argon2id password hashing and verification
//! - `session` — refresh-token slot persistence and the login/refresh flows
//! - `rbac` — role-based admin gate

pub mod jwt;
pub mod password;
pub mod rbac;
pub mod session;

pub use jwt::{AccessClaims, JwtDecoder, JwtEncoder, RefreshClaims, TokenPair};
pub use password::PasswordHasher;
pub use rbac::RbacEnforcer;
pub use session::{SessionManager, SessionStore};
