//! Repository layer for the room booking service.
//!
//! Provides the in-memory storage behind the Handler -> Repository
//! architecture. All room and booking access goes through `BookingStore`.

pub mod store;

pub use store::BookingStore;
