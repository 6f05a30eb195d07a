//! User repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use roomly_core::error::{AppError, ErrorKind};
use roomly_core::result::AppResult;
use roomly_entity::user::model::CreateUser;
use roomly_entity::user::User;

/// Repository for user persistence and the refresh-token slot.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// Check whether an email address is already registered.
    pub async fn email_exists(&self, email: &str) -> AppResult<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE LOWER(email) = LOWER($1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to check email", e)
                })?;
        Ok(count > 0)
    }

    /// Create a new user.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (first_name, last_name, email, password_hash, role) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(data.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::conflict("Email is already registered")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    /// Replace the user's refresh-token slot.
    ///
    /// The previous value is overwritten, which immediately invalidates
    /// any older refresh token even if still cryptographically valid.
    pub async fn update_refresh_token(&self, user_id: Uuid, token: &str) -> AppResult<()> {
        let result =
            sqlx::query("UPDATE users SET refresh_token = $2, updated_at = NOW() WHERE id = $1")
                .bind(user_id)
                .bind(token)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to update refresh token", e)
                })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("User {user_id} not found")));
        }
        Ok(())
    }

    /// Read the user's current refresh-token slot.
    pub async fn get_refresh_token(&self, user_id: Uuid) -> AppResult<Option<String>> {
        sqlx::query_scalar::<_, Option<String>>("SELECT refresh_token FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to read refresh token", e)
            })
            .map(Option::flatten)
    }
}
