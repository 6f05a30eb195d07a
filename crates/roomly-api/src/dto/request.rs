//! Request DTOs with validation rules.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// `HH:mm` 24-hour time pattern for room operating hours.
static TIME_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").expect("valid HH:mm pattern"));

/// Registration request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    /// First name.
    #[validate(length(min = 2, message = "First name must be at least 2 characters long"))]
    pub first_name: String,
    /// Last name.
    #[validate(length(min = 2, message = "Last name must be at least 2 characters long"))]
    pub last_name: String,
    /// Email address.
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 4, message = "Password must be at least 4 characters long"))]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RefreshRequest {
    /// Refresh token issued at login.
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

/// Admin user-creation request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// First name.
    #[validate(length(min = 2, message = "First name must be at least 2 characters long"))]
    pub first_name: String,
    /// Last name.
    #[validate(length(min = 2, message = "Last name must be at least 2 characters long"))]
    pub last_name: String,
    /// Email address.
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,
    /// Role name (`USER` or `ADMIN`); defaults to `USER`.
    pub role: Option<String>,
}

/// Meeting room creation request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRoomRequest {
    /// Room name.
    #[validate(length(min = 2, message = "name must be at least 2 characters long"))]
    pub name: String,
    /// Opening time.
    #[validate(regex(path = *TIME_FORMAT, message = "open_time must be in HH:mm format"))]
    pub open_time: String,
    /// Closing time.
    #[validate(regex(path = *TIME_FORMAT, message = "close_time must be in HH:mm format"))]
    pub close_time: String,
    /// Slot granularity in minutes.
    #[validate(range(min = 5, message = "slot_interval_minutes must be at least 5 minutes"))]
    pub slot_interval_minutes: i32,
}

/// Meeting room update request body; absent fields keep their values.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateRoomRequest {
    /// New room name.
    #[validate(length(min = 2, message = "name must be at least 2 characters long"))]
    pub name: Option<String>,
    /// New opening time.
    #[validate(regex(path = *TIME_FORMAT, message = "open_time must be in HH:mm format"))]
    pub open_time: Option<String>,
    /// New closing time.
    #[validate(regex(path = *TIME_FORMAT, message = "close_time must be in HH:mm format"))]
    pub close_time: Option<String>,
    /// New slot granularity in minutes.
    #[validate(range(min = 5, message = "slot_interval_minutes must be at least 5 minutes"))]
    pub slot_interval_minutes: Option<i32>,
}

/// Booking creation request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBookingRequest {
    /// Booking title.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Room to reserve.
    pub meeting_room_id: Uuid,
    /// Reservation start.
    pub start_time: DateTime<Utc>,
    /// Reservation end.
    pub end_time: DateTime<Utc>,
    /// Free-text purpose.
    #[validate(length(min = 3, message = "purpose must be at least 3 characters long"))]
    pub purpose: String,
}

/// Booking update request body; absent fields keep their values.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateBookingRequest {
    /// New booking title.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: Option<String>,
    /// New room.
    pub meeting_room_id: Option<Uuid>,
    /// New start.
    pub start_time: Option<DateTime<Utc>>,
    /// New end.
    pub end_time: Option<DateTime<Utc>>,
    /// New purpose.
    #[validate(length(min = 3, message = "purpose must be at least 3 characters long"))]
    pub purpose: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_format_pattern() {
        for ok in ["00:00", "09:30", "19:05", "23:59"] {
            assert!(TIME_FORMAT.is_match(ok), "{ok} should match");
        }
        for bad in ["24:00", "9:30", "12:60", "12:5", "noon", "12:345"] {
            assert!(!TIME_FORMAT.is_match(bad), "{bad} should not match");
        }
    }

    #[test]
    fn test_room_request_rules() {
        let req = CreateRoomRequest {
            name: "R1".to_string(),
            open_time: "09:00".to_string(),
            close_time: "17:00".to_string(),
            slot_interval_minutes: 15,
        };
        assert!(req.validate().is_ok());

        let bad = CreateRoomRequest {
            open_time: "9am".to_string(),
            slot_interval_minutes: 1,
            ..req
        };
        let errors = bad.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("open_time"));
        assert!(fields.contains_key("slot_interval_minutes"));
    }

    #[test]
    fn test_login_request_rules() {
        let req = LoginRequest {
            email: "not-an-email".to_string(),
            password: "abc".to_string(),
        };
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_optional_fields_skip_validation_when_absent() {
        assert!(UpdateRoomRequest::default().validate().is_ok());
        assert!(UpdateBookingRequest::default().validate().is_ok());
    }
}
