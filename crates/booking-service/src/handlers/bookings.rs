//! Booking handlers for the room booking service.
//!
//! Implements the booking ledger and customer-facing endpoints:
//!
//! - `POST /api/bookRoom` - Book a time slot in a room
//! - `GET /api/listAllCustomers` - List every booking with its room name
//! - `GET /api/customerBookingDetails/:customer_name` - Bookings for one customer

use crate::errors::BookingError;
use crate::models::{BookRoomRequest, BookRoomResponse, Booking, BookingWithRoomName};
use crate::routes::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;
use tracing::{info, instrument};

// ============================================================================
// Handler: POST /api/bookRoom
// ============================================================================

/// Handler for POST /api/bookRoom
///
/// Books a time slot in a room. The referenced room must exist and the
/// requested slot must not overlap an existing booking for the same room
/// on the same date.
///
/// ## Request Body
///
/// ```json
/// {
///   "customerName": "Alice",
///   "date": "2024-01-01",
///   "startTime": "10:00",
///   "endTime": "11:00",
///   "roomId": "101"
/// }
/// ```
///
/// ## Response
///
/// - 201 Created: `{"message": "Room booked successfully", "booking": {...}}`
/// - 400 Bad Request: a required field is missing or empty
/// - 404 Not Found: no room matches `roomId`
/// - 409 Conflict: the slot overlaps an existing booking
#[instrument(skip(state, request))]
pub async fn book_room(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BookRoomRequest>,
) -> Result<(StatusCode, Json<BookRoomResponse>), BookingError> {
    let new_booking = request
        .validate()
        .map_err(|e| BookingError::Validation(e.to_string()))?;

    let booking = state.store.book_room(new_booking)?;

    info!(
        target: "booking.handlers.bookings",
        booking_id = booking.booking_id,
        room_id = %booking.room_id,
        date = %booking.date,
        status = booking.booking_status.as_str(),
        "Room booked"
    );

    Ok((
        StatusCode::CREATED,
        Json(BookRoomResponse {
            message: "Room booked successfully".to_string(),
            booking,
        }),
    ))
}

// ============================================================================
// Handler: GET /api/listAllCustomers
// ============================================================================

/// Handler for GET /api/listAllCustomers
///
/// Lists every booking in booking order, each annotated with the name of
/// the room it was made against. Bookings whose `roomId` no longer matches
/// any room carry a null `roomName`.
///
/// ## Response
///
/// - 200 OK: JSON array of bookings, each with a `roomName` field
#[instrument(skip_all, name = "booking.customers.list")]
pub async fn list_all_customers(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<BookingWithRoomName>> {
    let bookings: Vec<BookingWithRoomName> = state
        .store
        .bookings_with_room_name()
        .into_iter()
        .map(|(booking, room_name)| BookingWithRoomName::new(booking, room_name))
        .collect();

    info!(
        target: "booking.handlers.bookings",
        booking_count = bookings.len(),
        "Listed customer bookings"
    );

    Json(bookings)
}

// ============================================================================
// Handler: GET /api/customerBookingDetails/:customer_name
// ============================================================================

/// Handler for GET /api/customerBookingDetails/:customer_name
///
/// Lists the bookings made by one customer, matched by exact name. An
/// unknown customer yields an empty array rather than an error.
///
/// ## Response
///
/// - 200 OK: JSON array of bookings (possibly empty)
#[instrument(skip(state), fields(customer_name = %customer_name))]
pub async fn customer_booking_details(
    State(state): State<Arc<AppState>>,
    Path(customer_name): Path<String>,
) -> Json<Vec<Booking>> {
    let bookings = state.store.bookings_for_customer(&customer_name);

    info!(
        target: "booking.handlers.bookings",
        booking_count = bookings.len(),
        "Listed bookings for customer"
    );

    Json(bookings)
}
