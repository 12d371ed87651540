//! Room Booking Service Library
//!
//! This library provides the core functionality for the room booking
//! service - a small HTTP API responsible for:
//!
//! - Room registration (create, list with bookings)
//! - Booking time slots against rooms with overlap detection
//! - Customer-facing booking listings
//!
//! # Architecture
//!
//! The service follows the Handler -> Repository pattern:
//!
//! ```text
//! routes/mod.rs -> handlers/*.rs -> repositories/store.rs
//! ```
//!
//! # Modules
//!
//! - `config` - Service configuration from environment
//! - `errors` - Error types with HTTP status code mapping
//! - `handlers` - HTTP request handlers
//! - `models` - Data models
//! - `repositories` - In-memory room and booking storage
//! - `routes` - Axum router setup

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
