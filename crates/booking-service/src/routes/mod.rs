//! HTTP routes for the room booking service.
//!
//! Defines the Axum router and application state.

use crate::config::Config;
use crate::handlers;
use crate::repositories::BookingStore;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// In-memory room and booking storage.
    pub store: BookingStore,

    /// Service configuration.
    pub config: Config,
}

/// Build the application routes.
///
/// Creates an Axum router with:
/// - `/api/*` - Room and booking endpoints
/// - `/health` - Health check endpoint
/// - TraceLayer for request logging
pub fn build_routes(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Room catalog endpoints
        .route("/api/createRoom", post(handlers::create_room))
        .route("/api/listAllRooms", get(handlers::list_all_rooms))
        // Booking endpoints
        .route("/api/bookRoom", post(handlers::book_room))
        .route("/api/listAllCustomers", get(handlers::list_all_customers))
        .route(
            "/api/customerBookingDetails/:customer_name",
            get(handlers::customer_booking_details),
        )
        // Health check endpoint
        .route("/health", get(handlers::health_check))
        .with_state(state);

    // Apply global middleware layers
    api_routes.layer(TraceLayer::new_for_http())
}
