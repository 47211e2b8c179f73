//! Data models for the hotel booking service

pub mod booking;
pub mod customer;
pub mod hotel;
pub mod renting;
pub mod room;
pub mod status;
pub mod stay;

// Re-export commonly used types
pub use booking::{Booking, BookingDetails, CreateBooking};
pub use customer::Customer;
pub use hotel::{ChainAverage, Hotel, HotelInfo};
pub use renting::{CreateRenting, Renting};
pub use room::Room;
pub use status::{BookingStatus, RentingStatus};
pub use stay::StayRange;
