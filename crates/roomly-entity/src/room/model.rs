//! Meeting room entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A bookable meeting room with fixed daily operating hours.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MeetingRoom {
    /// Unique room identifier.
    pub id: Uuid,
    /// Unique room name.
    pub name: String,
    /// Daily opening time, `HH:mm` 24-hour format.
    pub open_time: String,
    /// Daily closing time, `HH:mm` 24-hour format.
    pub close_time: String,
    /// Booking slot granularity in minutes.
    pub slot_interval_minutes: i32,
    /// When the room was created.
    pub created_at: DateTime<Utc>,
    /// When the room was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new meeting room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMeetingRoom {
    /// Room name.
    pub name: String,
    /// Opening time, `HH:mm`.
    pub open_time: String,
    /// Closing time, `HH:mm`.
    pub close_time: String,
    /// Slot granularity in minutes.
    pub slot_interval_minutes: i32,
}

/// Partial update for an existing meeting room.
///
/// `None` fields keep their persisted values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMeetingRoom {
    /// New room name.
    pub name: Option<String>,
    /// New opening time, `HH:mm`.
    pub open_time: Option<String>,
    /// New closing time, `HH:mm`.
    pub close_time: Option<String>,
    /// New slot granularity in minutes.
    pub slot_interval_minutes: Option<i32>,
}
