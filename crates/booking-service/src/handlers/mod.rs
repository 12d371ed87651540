//! HTTP request handlers for the room booking service.

pub mod bookings;
pub mod health;
pub mod rooms;

pub use bookings::{book_room, customer_booking_details, list_all_customers};
pub use health::health_check;
pub use rooms::{create_room, list_all_rooms};
