//! Booking entity.

pub mod model;

pub use model::{Booking, CreateBooking, UpdateBooking};
