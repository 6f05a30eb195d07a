//! Response DTOs.
//!
//! Success envelopes carry `"status":"success"`; errors are produced by
//! the `AppError` response mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Simple success envelope with a message.
#[derive(Debug, Clone, Serialize)]
pub struct ApiMessage {
    /// Always `"success"`.
    pub status: &'static str,
    /// Human-readable message.
    pub message: &'static str,
}

impl ApiMessage {
    /// Creates a success message envelope.
    pub fn ok(message: &'static str) -> Self {
        Self {
            status: "success",
            message,
        }
    }
}

/// Success envelope wrapping a data payload.
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse<T: Serialize> {
    /// Always `"success"`.
    pub status: &'static str,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    /// Creates a success data envelope.
    pub fn ok(data: T) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}

/// Login response with the issued token pair.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    /// Always `"success"`.
    pub status: &'static str,
    /// Human-readable message.
    pub message: &'static str,
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
}

/// Refresh response with the newly issued access token.
#[derive(Debug, Clone, Serialize)]
pub struct RefreshResponse {
    /// Always `"success"`.
    pub status: &'static str,
    /// Newly issued access token.
    pub access_token: String,
}

/// Room summary for listings.
#[derive(Debug, Clone, Serialize)]
pub struct RoomSummary {
    /// Room id.
    pub id: Uuid,
    /// Room name.
    pub name: String,
}

/// Booking summary for the global listing.
#[derive(Debug, Clone, Serialize)]
pub struct BookingSummary {
    /// Booking id.
    pub id: Uuid,
    /// Reserved room.
    pub meeting_room_id: Uuid,
    /// Reservation start.
    pub start_time: DateTime<Utc>,
    /// Reservation end.
    pub end_time: DateTime<Utc>,
}

/// Booking detail for the per-user listing.
#[derive(Debug, Clone, Serialize)]
pub struct UserBookingItem {
    /// Booking id.
    pub id: Uuid,
    /// Booking title.
    pub name: String,
    /// Name of the reserved room.
    pub meeting_room_name: String,
    /// Free-text purpose.
    pub purpose: String,
    /// Reservation start.
    pub start_time: DateTime<Utc>,
    /// Reservation end.
    pub end_time: DateTime<Utc>,
}
