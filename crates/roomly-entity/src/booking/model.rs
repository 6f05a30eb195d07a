//! Booking entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A reservation of a meeting room by a user for a time range.
///
/// Bookings are owned by the creating user; updates and deletions are
/// scoped to the owner. Overlapping bookings for the same room are not
/// detected.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    /// Unique booking identifier.
    pub id: Uuid,
    /// Booking title.
    pub name: String,
    /// Free-text purpose.
    pub purpose: String,
    /// Owning user.
    pub user_id: Uuid,
    /// Reserved room.
    pub meeting_room_id: Uuid,
    /// Reservation start.
    pub start_time: DateTime<Utc>,
    /// Reservation end.
    pub end_time: DateTime<Utc>,
    /// When the booking was created.
    pub created_at: DateTime<Utc>,
    /// When the booking was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBooking {
    /// Booking title.
    pub name: String,
    /// Free-text purpose.
    pub purpose: String,
    /// Owning user.
    pub user_id: Uuid,
    /// Reserved room.
    pub meeting_room_id: Uuid,
    /// Reservation start.
    pub start_time: DateTime<Utc>,
    /// Reservation end.
    pub end_time: DateTime<Utc>,
}

/// Partial update for an existing booking.
///
/// `None` fields keep their persisted values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBooking {
    /// New booking title.
    pub name: Option<String>,
    /// New purpose.
    pub purpose: Option<String>,
    /// New room.
    pub meeting_room_id: Option<Uuid>,
    /// New start.
    pub start_time: Option<DateTime<Utc>>,
    /// New end.
    pub end_time: Option<DateTime<Utc>>,
}
