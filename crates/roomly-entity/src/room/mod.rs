//! Meeting room entity and operating-hours validation.

pub mod model;
pub mod schedule;

pub use model::{CreateMeetingRoom, MeetingRoom, UpdateMeetingRoom};
