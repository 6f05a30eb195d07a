//! # roomly-entity
//!
//! Domain entity models for the Roomly booking backend: users and roles,
//! meeting rooms with their operating-hours window, and bookings.

pub mod booking;
pub mod room;
pub mod user;

pub use booking::Booking;
pub use room::MeetingRoom;
pub use user::{User, UserRole};
