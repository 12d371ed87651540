//! Room handlers for the room booking service.
//!
//! Implements the room registry endpoints:
//!
//! - `POST /api/createRoom` - Register a room
//! - `GET /api/listAllRooms` - List rooms together with their bookings

use crate::errors::BookingError;
use crate::models::{CreateRoomRequest, CreateRoomResponse, RoomWithBookings};
use crate::routes::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;
use tracing::{info, instrument};

// ============================================================================
// Handler: POST /api/createRoom
// ============================================================================

/// Handler for POST /api/createRoom
///
/// Registers a room in the catalog. Every field is required; duplicate
/// room numbers are accepted and stored as separate entries.
///
/// ## Request Body
///
/// ```json
/// {
///   "roomNumber": "101",
///   "seatsAvailable": 10,
///   "amenities": "WiFi, Projector",
///   "pricePerHour": 50.0
/// }
/// ```
///
/// ## Response
///
/// - 201 Created: `{"message": "Room created successfully", "room": {...}}`
/// - 400 Bad Request: a required field is missing or empty
#[instrument(skip(state, request))]
pub async fn create_room(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateRoomRequest>,
) -> Result<(StatusCode, Json<CreateRoomResponse>), BookingError> {
    let new_room = request
        .validate()
        .map_err(|e| BookingError::Validation(e.to_string()))?;

    let room = state.store.create_room(new_room);

    info!(
        target: "booking.handlers.rooms",
        room_number = %room.room_number,
        seats_available = room.seats_available,
        "Room created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateRoomResponse {
            message: "Room created successfully".to_string(),
            room,
        }),
    ))
}

// ============================================================================
// Handler: GET /api/listAllRooms
// ============================================================================

/// Handler for GET /api/listAllRooms
///
/// Lists every room in creation order. Each room is annotated with the
/// bookings whose `roomId` matches its room number, in booking order.
///
/// ## Response
///
/// - 200 OK: JSON array of rooms, each with an embedded `bookings` array
#[instrument(skip_all, name = "booking.rooms.list")]
pub async fn list_all_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomWithBookings>> {
    let rooms: Vec<RoomWithBookings> = state
        .store
        .rooms_with_bookings()
        .into_iter()
        .map(|(room, bookings)| RoomWithBookings::new(room, bookings))
        .collect();

    info!(
        target: "booking.handlers.rooms",
        room_count = rooms.len(),
        "Listed rooms"
    );

    Json(rooms)
}
