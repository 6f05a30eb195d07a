//! Application state shared across all handlers and extractors.

use std::sync::Arc;

use sqlx::PgPool;

use roomly_auth::jwt::decoder::JwtDecoder;
use roomly_auth::password::PasswordHasher;
use roomly_auth::rbac::RbacEnforcer;
use roomly_auth::session::manager::SessionManager;
use roomly_core::config::AppConfig;
use roomly_database::repositories::{BookingRepository, MeetingRoomRepository, UserRepository};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// User repository.
    pub user_repo: Arc<UserRepository>,
    /// Meeting room repository.
    pub room_repo: Arc<MeetingRoomRepository>,
    /// Booking repository.
    pub booking_repo: Arc<BookingRepository>,
    /// Password hasher (Argon2).
    pub password_hasher: Arc<PasswordHasher>,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Login/refresh flow orchestrator.
    pub session_manager: Arc<SessionManager>,
    /// Role-based access control enforcer.
    pub rbac_enforcer: Arc<RbacEnforcer>,
}
