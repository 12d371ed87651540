//! In-memory room and booking storage.
//!
//! The store owns the two process-wide collections (rooms and bookings)
//! plus the booking ID counter, and serializes access with an internal
//! `RwLock`. Every mutating operation runs under a single write-lock
//! acquisition, so the existence check, the conflict scan, and the append
//! are atomic with respect to each other. Nothing is ever deleted or
//! updated; both collections only grow, in insertion order.

use crate::errors::BookingError;
use crate::models::{Booking, BookingStatus, NewBooking, NewRoom, Room};
use chrono::Utc;
use parking_lot::RwLock;
use std::sync::Arc;

/// The collections behind the lock.
#[derive(Debug)]
struct StoreData {
    rooms: Vec<Room>,
    bookings: Vec<Booking>,
    next_booking_id: u64,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            rooms: Vec::new(),
            bookings: Vec::new(),
            // Booking IDs start at 1.
            next_booking_id: 1,
        }
    }
}

/// Shared in-memory store for rooms and bookings.
///
/// Cloning is cheap; clones share the same underlying data, so a handle
/// can be kept by the application state and by a test at the same time.
#[derive(Debug, Clone, Default)]
pub struct BookingStore {
    data: Arc<RwLock<StoreData>>,
}

impl BookingStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a room and return the stored record.
    ///
    /// Duplicate room numbers are allowed and stored as independent
    /// entries; lookups always take the first match in insertion order.
    pub fn create_room(&self, new_room: NewRoom) -> Room {
        let room = Room::from(new_room);

        let mut data = self.data.write();
        data.rooms.push(room.clone());

        room
    }

    /// Book a room after checking that it exists and that the requested
    /// slot does not overlap an existing booking for the same room and
    /// date.
    ///
    /// On success the booking is assigned the next sequential ID, stamped
    /// with the current server time, and appended to the ledger.
    ///
    /// # Errors
    ///
    /// - `BookingError::NotFound` if no room matches `room_id`.
    /// - `BookingError::Conflict` if the slot overlaps an existing booking.
    pub fn book_room(&self, new_booking: NewBooking) -> Result<Booking, BookingError> {
        let mut data = self.data.write();

        if !data
            .rooms
            .iter()
            .any(|room| room.room_number == new_booking.room_id)
        {
            return Err(BookingError::NotFound("Room not found".to_string()));
        }

        if data
            .bookings
            .iter()
            .any(|existing| conflicts_with(existing, &new_booking))
        {
            return Err(BookingError::Conflict(
                "Room already booked for the given date and time".to_string(),
            ));
        }

        let booking = Booking {
            customer_name: new_booking.customer_name,
            date: new_booking.date,
            start_time: new_booking.start_time,
            end_time: new_booking.end_time,
            room_id: new_booking.room_id,
            booking_id: data.next_booking_id,
            booking_date: Utc::now(),
            booking_status: BookingStatus::Booked,
        };

        data.next_booking_id += 1;
        data.bookings.push(booking.clone());

        Ok(booking)
    }

    /// Snapshot of every room in creation order, each paired with the
    /// bookings whose `room_id` matches its number.
    ///
    /// Duplicate rooms each carry the same attached bookings.
    pub fn rooms_with_bookings(&self) -> Vec<(Room, Vec<Booking>)> {
        let data = self.data.read();

        data.rooms
            .iter()
            .map(|room| {
                let bookings = data
                    .bookings
                    .iter()
                    .filter(|booking| booking.room_id == room.room_number)
                    .cloned()
                    .collect();
                (room.clone(), bookings)
            })
            .collect()
    }

    /// Snapshot of every booking in creation order, each paired with the
    /// number of the first room matching its `room_id`, or `None` if no
    /// room matches.
    pub fn bookings_with_room_name(&self) -> Vec<(Booking, Option<String>)> {
        let data = self.data.read();

        data.bookings
            .iter()
            .map(|booking| {
                let room_name = data
                    .rooms
                    .iter()
                    .find(|room| room.room_number == booking.room_id)
                    .map(|room| room.room_number.clone());
                (booking.clone(), room_name)
            })
            .collect()
    }

    /// Bookings whose `customer_name` equals the given name exactly, in
    /// creation order. Matching is case-sensitive.
    pub fn bookings_for_customer(&self, customer_name: &str) -> Vec<Booking> {
        let data = self.data.read();

        data.bookings
            .iter()
            .filter(|booking| booking.customer_name == customer_name)
            .cloned()
            .collect()
    }
}

/// Whether a candidate booking overlaps an existing booking.
///
/// Two bookings collide when they target the same room on the same date
/// and their half-open `[start, end)` intervals intersect: the candidate's
/// start falls inside the existing interval, its end falls inside it, or
/// it contains the existing interval entirely. Times compare as plain
/// strings, so callers must supply a consistently ordered representation
/// ("HH:MM", zero-padded).
fn conflicts_with(existing: &Booking, candidate: &NewBooking) -> bool {
    existing.room_id == candidate.room_id
        && existing.date == candidate.date
        && ((candidate.start_time >= existing.start_time
            && candidate.start_time < existing.end_time)
            || (candidate.end_time > existing.start_time
                && candidate.end_time <= existing.end_time)
            || (candidate.start_time <= existing.start_time
                && candidate.end_time >= existing.end_time))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn new_room(number: &str) -> NewRoom {
        NewRoom {
            room_number: number.to_string(),
            seats_available: 10,
            amenities: "WiFi".to_string(),
            price_per_hour: 50.0,
        }
    }

    fn new_booking(
        customer: &str,
        date: &str,
        start: &str,
        end: &str,
        room_id: &str,
    ) -> NewBooking {
        NewBooking {
            customer_name: customer.to_string(),
            date: date.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            room_id: room_id.to_string(),
        }
    }

    /// Store with one room "101" and one booking 10:00-11:00 on 2024-01-01.
    fn store_with_booked_slot() -> BookingStore {
        let store = BookingStore::new();
        store.create_room(new_room("101"));
        store
            .book_room(new_booking("Alice", "2024-01-01", "10:00", "11:00", "101"))
            .expect("initial booking should succeed");
        store
    }

    // ========================================================================
    // Room Creation
    // ========================================================================

    #[test]
    fn test_create_room_returns_stored_record() {
        let store = BookingStore::new();

        let room = store.create_room(new_room("101"));

        assert_eq!(room.room_number, "101");
        assert_eq!(room.seats_available, 10);
        assert_eq!(room.price_per_hour, 50.0);
    }

    #[test]
    fn test_create_room_appends_in_order() {
        let store = BookingStore::new();
        store.create_room(new_room("101"));
        store.create_room(new_room("102"));

        let rooms = store.rooms_with_bookings();
        let numbers: Vec<&str> = rooms
            .iter()
            .map(|(room, _)| room.room_number.as_str())
            .collect();

        assert_eq!(numbers, ["101", "102"]);
    }

    #[test]
    fn test_create_room_allows_duplicates() {
        let store = BookingStore::new();
        store.create_room(new_room("101"));
        store.create_room(new_room("101"));

        assert_eq!(store.rooms_with_bookings().len(), 2);
    }

    // ========================================================================
    // Booking
    // ========================================================================

    #[test]
    fn test_book_room_success() {
        let store = BookingStore::new();
        store.create_room(new_room("101"));

        let booking = store
            .book_room(new_booking("Alice", "2024-01-01", "10:00", "11:00", "101"))
            .expect("booking should succeed");

        assert_eq!(booking.customer_name, "Alice");
        assert_eq!(booking.room_id, "101");
        assert_eq!(booking.booking_id, 1);
        assert_eq!(booking.booking_status, BookingStatus::Booked);
        assert!(booking.booking_date <= Utc::now());
    }

    #[test]
    fn test_book_room_assigns_sequential_ids() {
        let store = BookingStore::new();
        store.create_room(new_room("101"));

        let ids: Vec<u64> = (0..3)
            .map(|hour| {
                let start = format!("{:02}:00", 9 + hour);
                let end = format!("{:02}:00", 10 + hour);
                store
                    .book_room(new_booking("Alice", "2024-01-01", &start, &end, "101"))
                    .expect("booking should succeed")
                    .booking_id
            })
            .collect();

        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn test_book_room_unknown_room_returns_not_found() {
        let store = BookingStore::new();
        store.create_room(new_room("101"));

        let result = store.book_room(new_booking("Alice", "2024-01-01", "10:00", "11:00", "999"));

        assert!(matches!(result, Err(BookingError::NotFound(msg)) if msg == "Room not found"));
        // The failed attempt must not reach the ledger.
        assert!(store.bookings_for_customer("Alice").is_empty());
    }

    #[test]
    fn test_book_room_against_duplicated_room_number() {
        let store = BookingStore::new();
        store.create_room(new_room("101"));
        store.create_room(new_room("101"));

        let booking = store
            .book_room(new_booking("Alice", "2024-01-01", "10:00", "11:00", "101"))
            .expect("booking should succeed");

        assert_eq!(booking.room_id, "101");
    }

    // ========================================================================
    // Conflict Detection
    // ========================================================================

    #[test]
    fn test_contained_interval_conflicts() {
        let store = store_with_booked_slot();

        let result = store.book_room(new_booking("Bob", "2024-01-01", "10:30", "10:45", "101"));

        assert!(matches!(
            result,
            Err(BookingError::Conflict(msg)) if msg == "Room already booked for the given date and time"
        ));
    }

    #[test]
    fn test_containing_interval_conflicts() {
        // A candidate that fully contains the existing slot with neither
        // endpoint matching is caught by the containment clause.
        let store = store_with_booked_slot();

        let result = store.book_room(new_booking("Bob", "2024-01-01", "09:30", "11:30", "101"));

        assert!(matches!(result, Err(BookingError::Conflict(_))));
    }

    #[test]
    fn test_identical_interval_conflicts() {
        let store = store_with_booked_slot();

        let result = store.book_room(new_booking("Bob", "2024-01-01", "10:00", "11:00", "101"));

        assert!(matches!(result, Err(BookingError::Conflict(_))));
    }

    #[test]
    fn test_overlapping_start_conflicts() {
        let store = store_with_booked_slot();

        let result = store.book_room(new_booking("Bob", "2024-01-01", "10:45", "11:30", "101"));

        assert!(matches!(result, Err(BookingError::Conflict(_))));
    }

    #[test]
    fn test_overlapping_end_conflicts() {
        let store = store_with_booked_slot();

        let result = store.book_room(new_booking("Bob", "2024-01-01", "09:30", "10:15", "101"));

        assert!(matches!(result, Err(BookingError::Conflict(_))));
    }

    #[test]
    fn test_disjoint_earlier_interval_is_accepted() {
        let store = store_with_booked_slot();

        let result = store.book_room(new_booking("Bob", "2024-01-01", "09:00", "09:30", "101"));

        assert!(result.is_ok());
    }

    #[test]
    fn test_adjacent_after_is_accepted() {
        // The end bound is exclusive, so a booking starting exactly at the
        // existing end does not overlap.
        let store = store_with_booked_slot();

        let result = store.book_room(new_booking("Bob", "2024-01-01", "11:00", "12:00", "101"));

        assert!(result.is_ok());
    }

    #[test]
    fn test_adjacent_before_is_accepted() {
        let store = store_with_booked_slot();

        let result = store.book_room(new_booking("Bob", "2024-01-01", "09:00", "10:00", "101"));

        assert!(result.is_ok());
    }

    #[test]
    fn test_same_slot_other_date_is_accepted() {
        let store = store_with_booked_slot();

        let result = store.book_room(new_booking("Bob", "2024-01-02", "10:00", "11:00", "101"));

        assert!(result.is_ok());
    }

    #[test]
    fn test_same_slot_other_room_is_accepted() {
        let store = store_with_booked_slot();
        store.create_room(new_room("102"));

        let result = store.book_room(new_booking("Bob", "2024-01-01", "10:00", "11:00", "102"));

        assert!(result.is_ok());
    }

    // ========================================================================
    // Query Views
    // ========================================================================

    #[test]
    fn test_rooms_with_bookings_attaches_matching_only() {
        let store = BookingStore::new();
        store.create_room(new_room("101"));
        store.create_room(new_room("102"));
        store
            .book_room(new_booking("Alice", "2024-01-01", "10:00", "11:00", "101"))
            .expect("booking should succeed");

        let rooms = store.rooms_with_bookings();

        let (first_room, first_bookings) = rooms.first().expect("room 101 should be listed");
        assert_eq!(first_room.room_number, "101");
        assert_eq!(first_bookings.len(), 1);

        let (second_room, second_bookings) = rooms.get(1).expect("room 102 should be listed");
        assert_eq!(second_room.room_number, "102");
        assert!(second_bookings.is_empty());
    }

    #[test]
    fn test_rooms_with_bookings_duplicates_share_bookings() {
        let store = BookingStore::new();
        store.create_room(new_room("101"));
        store.create_room(new_room("101"));
        store
            .book_room(new_booking("Alice", "2024-01-01", "10:00", "11:00", "101"))
            .expect("booking should succeed");

        let rooms = store.rooms_with_bookings();

        assert_eq!(rooms.len(), 2);
        for (_, bookings) in &rooms {
            assert_eq!(bookings.len(), 1);
        }
    }

    #[test]
    fn test_bookings_with_room_name_resolves_first_match() {
        let store = store_with_booked_slot();

        let listed = store.bookings_with_room_name();

        let (booking, room_name) = listed.first().expect("booking should be listed");
        assert_eq!(booking.customer_name, "Alice");
        assert_eq!(room_name.as_deref(), Some("101"));
    }

    #[test]
    fn test_bookings_for_customer_exact_match() {
        let store = store_with_booked_slot();
        store
            .book_room(new_booking("Bob", "2024-01-01", "11:00", "12:00", "101"))
            .expect("booking should succeed");

        let bookings = store.bookings_for_customer("Alice");

        assert_eq!(bookings.len(), 1);
        assert_eq!(
            bookings.first().map(|b| b.customer_name.as_str()),
            Some("Alice")
        );
    }

    #[test]
    fn test_bookings_for_customer_is_case_sensitive() {
        let store = store_with_booked_slot();

        assert!(store.bookings_for_customer("alice").is_empty());
    }

    #[test]
    fn test_bookings_for_customer_unknown_name_is_empty() {
        let store = store_with_booked_slot();

        assert!(store.bookings_for_customer("Mallory").is_empty());
    }

    // ========================================================================
    // Conflict Predicate
    // ========================================================================

    #[test]
    fn test_conflicts_with_requires_same_room_and_date() {
        let store = store_with_booked_slot();
        let listed = store.bookings_with_room_name();
        let (existing, _) = listed.first().expect("booking should be listed");

        let other_room = new_booking("Bob", "2024-01-01", "10:00", "11:00", "102");
        let other_date = new_booking("Bob", "2024-01-02", "10:00", "11:00", "101");

        assert!(!conflicts_with(existing, &other_room));
        assert!(!conflicts_with(existing, &other_date));
    }

    #[test]
    fn test_conflicts_with_is_exclusive_at_end() {
        let store = store_with_booked_slot();
        let listed = store.bookings_with_room_name();
        let (existing, _) = listed.first().expect("booking should be listed");

        let at_end = new_booking("Bob", "2024-01-01", "11:00", "12:00", "101");
        let at_start = new_booking("Bob", "2024-01-01", "09:00", "10:00", "101");

        assert!(!conflicts_with(existing, &at_end));
        assert!(!conflicts_with(existing, &at_start));
    }
}
