//! # Booking Test Utilities
//!
//! Shared test utilities for the room booking service.
//!
//! This crate provides:
//! - Server test harness (`TestBookingServer` for E2E tests)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use booking_test_utils::*;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<()> {
//!     let server = TestBookingServer::spawn().await?;
//!     let client = reqwest::Client::new();
//!
//!     let response = client
//!         .get(format!("{}/health", server.url()))
//!         .send()
//!         .await?;
//!
//!     assert_eq!(response.status(), 200);
//!     Ok(())
//! }
//! ```

pub mod server_harness;

// Re-export commonly used items
pub use server_harness::*;
