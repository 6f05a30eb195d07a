//! Concrete repository implementations over the PostgreSQL pool.

pub mod booking;
pub mod room;
pub mod user;

pub use booking::BookingRepository;
pub use room::MeetingRoomRepository;
pub use user::UserRepository;
