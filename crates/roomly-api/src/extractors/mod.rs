//! Request extractors.

pub mod auth;
pub mod json;

pub use auth::{AdminUser, AuthUser};
pub use json::ValidatedJson;
