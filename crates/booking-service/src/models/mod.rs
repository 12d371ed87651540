//! Room booking service models.
//!
//! Contains the wire and domain types used across the service. All wire
//! JSON uses camelCase field names. Required request fields are declared
//! as `Option` so that `validate()` can apply the presence rule (absent,
//! null, empty string, and zero all count as missing) and report the
//! single client-facing validation message.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error message returned when any required request field is missing.
pub const MISSING_PARAMETERS_MESSAGE: &str = "Missing required parameters";

/// Booking status enumeration.
///
/// There is exactly one state: bookings are never cancelled or updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    /// The slot is reserved.
    Booked,
}

impl BookingStatus {
    /// Returns the string representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Booked => "Booked",
        }
    }
}

/// A bookable room.
///
/// `room_number` is the caller-supplied primary key. Uniqueness is not
/// enforced; lookups take the first match in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Caller-supplied room identifier.
    pub room_number: String,

    /// Seat count.
    pub seats_available: u32,

    /// Amenities description.
    pub amenities: String,

    /// Hourly price.
    pub price_per_hour: f64,
}

/// A reservation of a room for a date and time interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Name of the booking customer.
    pub customer_name: String,

    /// Booking date, as supplied by the caller (e.g. "2024-01-01").
    pub date: String,

    /// Interval start, inclusive. Compared lexicographically, so callers
    /// must use a zero-padded "HH:MM" form.
    pub start_time: String,

    /// Interval end, exclusive.
    pub end_time: String,

    /// The booked room's `room_number` (a weak reference, checked only at
    /// booking time).
    pub room_id: String,

    /// Sequential identifier assigned by the store, starting at 1.
    pub booking_id: u64,

    /// Server-side creation timestamp.
    pub booking_date: DateTime<Utc>,

    /// Always `Booked`.
    pub booking_status: BookingStatus,
}

// ============================================================================
// Request Models
// ============================================================================

/// Validated room attributes, produced by `CreateRoomRequest::validate`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRoom {
    pub room_number: String,
    pub seats_available: u32,
    pub amenities: String,
    pub price_per_hour: f64,
}

impl From<NewRoom> for Room {
    fn from(new_room: NewRoom) -> Self {
        Self {
            room_number: new_room.room_number,
            seats_available: new_room.seats_available,
            amenities: new_room.amenities,
            price_per_hour: new_room.price_per_hour,
        }
    }
}

/// Request body for `POST /api/createRoom`.
///
/// Unknown extra fields are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    pub room_number: Option<String>,

    pub seats_available: Option<u32>,

    pub amenities: Option<String>,

    pub price_per_hour: Option<f64>,
}

impl CreateRoomRequest {
    /// Validate the request.
    ///
    /// Applies the presence rule to every field and converts the request
    /// into the attributes to store.
    ///
    /// # Errors
    ///
    /// Returns the validation message if any field is missing.
    pub fn validate(self) -> Result<NewRoom, &'static str> {
        let room_number = self.room_number.filter(|value| !value.is_empty());
        let seats_available = self.seats_available.filter(|value| *value != 0);
        let amenities = self.amenities.filter(|value| !value.is_empty());
        let price_per_hour = self.price_per_hour.filter(|value| *value != 0.0);

        match (room_number, seats_available, amenities, price_per_hour) {
            (Some(room_number), Some(seats_available), Some(amenities), Some(price_per_hour)) => {
                Ok(NewRoom {
                    room_number,
                    seats_available,
                    amenities,
                    price_per_hour,
                })
            }
            _ => Err(MISSING_PARAMETERS_MESSAGE),
        }
    }
}

/// Validated booking attributes, produced by `BookRoomRequest::validate`.
///
/// Identity, timestamp, and status are assigned by the store at insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub customer_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub room_id: String,
}

/// Request body for `POST /api/bookRoom`.
///
/// Unknown extra fields are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRoomRequest {
    pub customer_name: Option<String>,

    pub date: Option<String>,

    pub start_time: Option<String>,

    pub end_time: Option<String>,

    pub room_id: Option<String>,
}

impl BookRoomRequest {
    /// Validate the request.
    ///
    /// Applies the presence rule to every field and converts the request
    /// into the booking attributes to store. Time values are not format
    /// checked; interval comparisons rely on the caller supplying a
    /// consistent "HH:MM" representation.
    ///
    /// # Errors
    ///
    /// Returns the validation message if any field is missing.
    pub fn validate(self) -> Result<NewBooking, &'static str> {
        let customer_name = self.customer_name.filter(|value| !value.is_empty());
        let date = self.date.filter(|value| !value.is_empty());
        let start_time = self.start_time.filter(|value| !value.is_empty());
        let end_time = self.end_time.filter(|value| !value.is_empty());
        let room_id = self.room_id.filter(|value| !value.is_empty());

        match (customer_name, date, start_time, end_time, room_id) {
            (Some(customer_name), Some(date), Some(start_time), Some(end_time), Some(room_id)) => {
                Ok(NewBooking {
                    customer_name,
                    date,
                    start_time,
                    end_time,
                    room_id,
                })
            }
            _ => Err(MISSING_PARAMETERS_MESSAGE),
        }
    }
}

// ============================================================================
// Response Models
// ============================================================================

/// Response for `POST /api/createRoom`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRoomResponse {
    /// Human-readable confirmation.
    pub message: String,

    /// The stored room.
    pub room: Room,
}

/// Response for `POST /api/bookRoom`.
#[derive(Debug, Clone, Serialize)]
pub struct BookRoomResponse {
    /// Human-readable confirmation.
    pub message: String,

    /// The stored booking.
    pub booking: Booking,
}

/// Room entry in the `GET /api/listAllRooms` response: the room's
/// attributes with every booking that references it attached.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomWithBookings {
    pub room_number: String,

    pub seats_available: u32,

    pub amenities: String,

    pub price_per_hour: f64,

    /// Bookings whose `room_id` equals this room's number, in insertion
    /// order.
    pub bookings: Vec<Booking>,
}

impl RoomWithBookings {
    /// Attach bookings to a room.
    pub fn new(room: Room, bookings: Vec<Booking>) -> Self {
        Self {
            room_number: room.room_number,
            seats_available: room.seats_available,
            amenities: room.amenities,
            price_per_hour: room.price_per_hour,
            bookings,
        }
    }
}

/// Booking entry in the `GET /api/listAllCustomers` response: the booking
/// with the booked room's number attached.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingWithRoomName {
    pub customer_name: String,

    pub date: String,

    pub start_time: String,

    pub end_time: String,

    pub room_id: String,

    pub booking_id: u64,

    pub booking_date: DateTime<Utc>,

    pub booking_status: BookingStatus,

    /// The first matching room's number, or null if no room matches. The
    /// field is always present.
    pub room_name: Option<String>,
}

impl BookingWithRoomName {
    /// Attach a room name to a booking.
    pub fn new(booking: Booking, room_name: Option<String>) -> Self {
        Self {
            customer_name: booking.customer_name,
            date: booking.date,
            start_time: booking.start_time,
            end_time: booking.end_time,
            room_id: booking.room_id,
            booking_id: booking.booking_id,
            booking_date: booking.booking_date,
            booking_status: booking.booking_status,
            room_name,
        }
    }
}

/// Health check response.
///
/// Returned by the `/health` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service health status (always "healthy" - there are no dependencies
    /// to probe).
    pub status: String,
}
