//! Data models for the hotel server

pub mod booking;
pub mod enums;
pub mod facility;
pub mod guest;
pub mod hotel;
pub mod room;
pub mod session;

// Re-export commonly used types
pub use booking::{FacilityBooking, FacilityBookingDetails, RoomBooking, RoomBookingDetails};
pub use enums::{BookingStatus, DayOfWeek, FacilityType, ResourceStatus, RoomType};
pub use facility::{Facility, FacilityDetails, FacilityWithHours, OperatingHours};
pub use guest::{Guest, GuestProfile, Membership};
pub use hotel::Hotel;
pub use room::{Room, RoomDetails};
pub use session::{SessionClaims, SessionRole};
