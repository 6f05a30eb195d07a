//! Meeting room repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use roomly_core::error::{AppError, ErrorKind};
use roomly_core::result::AppResult;
use roomly_entity::room::model::{CreateMeetingRoom, UpdateMeetingRoom};
use roomly_entity::room::MeetingRoom;

/// Repository for meeting room CRUD operations.
#[derive(Debug, Clone)]
pub struct MeetingRoomRepository {
    pool: PgPool,
}

impl MeetingRoomRepository {
    /// Create a new meeting room repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a room by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<MeetingRoom>> {
        sqlx::query_as::<_, MeetingRoom>("SELECT * FROM meeting_rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find room by id", e))
    }

    /// Check whether a room name is already taken, optionally excluding
    /// one room (for updates renaming to their own current name).
    pub async fn name_exists(&self, name: &str, exclude_id: Option<Uuid>) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM meeting_rooms WHERE name = $1 AND ($2::uuid IS NULL OR id <> $2)",
        )
        .bind(name)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check room name", e))?;
        Ok(count > 0)
    }

    /// List all rooms, newest first.
    pub async fn list(&self) -> AppResult<Vec<MeetingRoom>> {
        sqlx::query_as::<_, MeetingRoom>("SELECT * FROM meeting_rooms ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list rooms", e))
    }

    /// Create a new room.
    pub async fn create(&self, data: &CreateMeetingRoom) -> AppResult<MeetingRoom> {
        sqlx::query_as::<_, MeetingRoom>(
            "INSERT INTO meeting_rooms (name, open_time, close_time, slot_interval_minutes) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.open_time)
        .bind(&data.close_time)
        .bind(data.slot_interval_minutes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("meeting_rooms_name_key") =>
            {
                AppError::conflict("Meeting room name already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create room", e),
        })
    }

    /// Apply a partial update; `None` fields keep their persisted values.
    pub async fn update(&self, id: Uuid, data: &UpdateMeetingRoom) -> AppResult<MeetingRoom> {
        sqlx::query_as::<_, MeetingRoom>(
            "UPDATE meeting_rooms SET name = COALESCE($2, name), \
                                      open_time = COALESCE($3, open_time), \
                                      close_time = COALESCE($4, close_time), \
                                      slot_interval_minutes = COALESCE($5, slot_interval_minutes), \
                                      updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.open_time)
        .bind(&data.close_time)
        .bind(data.slot_interval_minutes)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update room", e))?
        .ok_or_else(|| AppError::not_found("Meeting room not found"))
    }

    /// Delete a room by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM meeting_rooms WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete room", e))?;

        Ok(result.rows_affected() > 0)
    }
}
