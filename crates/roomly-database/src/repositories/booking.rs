//! Booking repository implementation.
//!
//! Mutating operations are owner-scoped: the `user_id` is part of every
//! UPDATE/DELETE predicate, so a user can never touch another user's
//! booking.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use roomly_core::error::{AppError, ErrorKind};
use roomly_core::result::AppResult;
use roomly_entity::booking::model::{CreateBooking, UpdateBooking};
use roomly_entity::booking::Booking;

/// A booking row joined with its room's name, for per-user listings.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BookingWithRoom {
    /// Booking identifier.
    pub id: Uuid,
    /// Booking title.
    pub name: String,
    /// Free-text purpose.
    pub purpose: String,
    /// Name of the reserved room.
    pub meeting_room_name: String,
    /// Reservation start.
    pub start_time: DateTime<Utc>,
    /// Reservation end.
    pub end_time: DateTime<Utc>,
}

/// Repository for booking CRUD operations.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new booking repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new booking.
    pub async fn create(&self, data: &CreateBooking) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (name, purpose, user_id, meeting_room_id, start_time, end_time) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.purpose)
        .bind(data.user_id)
        .bind(data.meeting_room_id)
        .bind(data.start_time)
        .bind(data.end_time)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create booking", e))
    }

    /// List all bookings, newest first.
    pub async fn list(&self) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list bookings", e))
    }

    /// List a user's bookings with room names, newest first.
    pub async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<BookingWithRoom>> {
        sqlx::query_as::<_, BookingWithRoom>(
            "SELECT b.id, b.name, b.purpose, m.name AS meeting_room_name, \
                    b.start_time, b.end_time \
             FROM bookings b \
             JOIN meeting_rooms m ON m.id = b.meeting_room_id \
             WHERE b.user_id = $1 \
             ORDER BY b.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list user bookings", e)
        })
    }

    /// Find a booking owned by the given user.
    pub async fn find_owned(&self, id: Uuid, user_id: Uuid) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find booking", e))
    }

    /// Apply a partial update to a booking owned by the given user.
    pub async fn update_owned(
        &self,
        id: Uuid,
        user_id: Uuid,
        data: &UpdateBooking,
    ) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET name = COALESCE($3, name), \
                                 purpose = COALESCE($4, purpose), \
                                 meeting_room_id = COALESCE($5, meeting_room_id), \
                                 start_time = COALESCE($6, start_time), \
                                 end_time = COALESCE($7, end_time), \
                                 updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .bind(&data.name)
        .bind(&data.purpose)
        .bind(data.meeting_room_id)
        .bind(data.start_time)
        .bind(data.end_time)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update booking", e))?
        .ok_or_else(|| AppError::not_found("Booking not found"))
    }

    /// Delete a booking owned by the given user.
    pub async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete booking", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
