//! Operating-hours window validation.
//!
//! A room's `open_time`/`close_time` pair must satisfy
//! `minutes(open) < minutes(close)` after every create and update. On
//! update the check runs over the *effective* pair: each changed time
//! merged over the persisted value.

use roomly_core::{AppError, AppResult};

/// Message attached to the `open_time` field when the window is inverted
/// or empty.
pub const WINDOW_ERROR: &str = "open_time must be lower than close_time";

/// Converts an `HH:mm` time string to minutes since midnight.
///
/// The HTTP layer validates the `HH:mm` pattern before this runs; a
/// malformed string reaching this point is still rejected rather than
/// panicking.
pub fn minutes_of(time: &str) -> AppResult<u16> {
    let (hours, minutes) = time
        .split_once(':')
        .ok_or_else(|| AppError::field_validation("open_time", WINDOW_ERROR))?;

    let hours: u16 = hours
        .parse()
        .map_err(|_| AppError::field_validation("open_time", WINDOW_ERROR))?;
    let minutes: u16 = minutes
        .parse()
        .map_err(|_| AppError::field_validation("open_time", WINDOW_ERROR))?;

    if hours > 23 || minutes > 59 {
        return Err(AppError::field_validation("open_time", WINDOW_ERROR));
    }

    Ok(hours * 60 + minutes)
}

/// Validates that `open_time` falls strictly before `close_time`.
///
/// Used at room creation, where both times are required.
pub fn validate_window(open_time: &str, close_time: &str) -> AppResult<()> {
    if minutes_of(open_time)? >= minutes_of(close_time)? {
        return Err(AppError::field_validation("open_time", WINDOW_ERROR));
    }
    Ok(())
}

/// Validates the window resulting from a partial update.
///
/// Each `None` side keeps the persisted value; the merged pair must
/// satisfy the same strict ordering as at creation.
pub fn validate_window_update(
    existing_open: &str,
    existing_close: &str,
    new_open: Option<&str>,
    new_close: Option<&str>,
) -> AppResult<()> {
    let open = new_open.unwrap_or(existing_open);
    let close = new_close.unwrap_or(existing_close);
    validate_window(open, close)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_of() {
        assert_eq!(minutes_of("00:00").unwrap(), 0);
        assert_eq!(minutes_of("09:30").unwrap(), 570);
        assert_eq!(minutes_of("23:59").unwrap(), 1439);
    }

    #[test]
    fn test_minutes_of_rejects_malformed() {
        assert!(minutes_of("24:00").is_err());
        assert!(minutes_of("12:60").is_err());
        assert!(minutes_of("0900").is_err());
        assert!(minutes_of("").is_err());
    }

    #[test]
    fn test_window_ordering() {
        assert!(validate_window("09:00", "17:00").is_ok());
        assert!(validate_window("09:00", "09:01").is_ok());

        let err = validate_window("09:00", "08:00").unwrap_err();
        let fields = err.fields.expect("field error");
        assert_eq!(fields.get("open_time").unwrap(), &vec![WINDOW_ERROR.to_string()]);
    }

    #[test]
    fn test_window_rejects_equal_times() {
        assert!(validate_window("12:00", "12:00").is_err());
    }

    #[test]
    fn test_update_merges_over_existing() {
        // Only close_time changes, below the persisted open_time.
        assert!(validate_window_update("09:00", "17:00", None, Some("08:00")).is_err());
        // Only open_time changes, above the persisted close_time.
        assert!(validate_window_update("09:00", "17:00", Some("18:00"), None).is_err());
        // No changes keep a valid persisted pair valid.
        assert!(validate_window_update("09:00", "17:00", None, None).is_ok());
        // Both sides replaced with a valid pair.
        assert!(validate_window_update("09:00", "10:00", Some("11:00"), Some("12:00")).is_ok());
    }
}
