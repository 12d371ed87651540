//! Test server harness for E2E testing
//!
//! Provides `TestBookingServer` for spawning real booking service instances
//! in tests.

use booking_service::config::Config;
use booking_service::repositories::BookingStore;
use booking_service::routes::{self, AppState};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Test harness for spawning the room booking service in E2E tests.
///
/// Each spawned server owns a fresh in-memory store, so tests are isolated
/// from each other without any external setup.
///
/// # Example
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_health_flow_e2e() -> Result<()> {
///     let server = TestBookingServer::spawn().await?;
///     let client = reqwest::Client::new();
///
///     let response = client
///         .get(format!("{}/health", server.url()))
///         .send()
///         .await?;
///
///     assert_eq!(response.status(), 200);
///     Ok(())
/// }
/// ```
pub struct TestBookingServer {
    addr: SocketAddr,
    store: BookingStore,
    config: Config,
    _handle: JoinHandle<()>,
}

impl TestBookingServer {
    /// Spawn a new test server instance with an empty store.
    ///
    /// The server will:
    /// - Bind to a random available port (127.0.0.1:0)
    /// - Start the HTTP server in the background
    ///
    /// # Returns
    /// * `Ok(TestBookingServer)` - Running server instance
    /// * `Err(anyhow::Error)` - If server spawn fails
    pub async fn spawn() -> Result<Self, anyhow::Error> {
        // Build configuration for test environment; port 0 requests an
        // ephemeral port from the OS
        let vars = HashMap::from([("PORT".to_string(), "0".to_string())]);

        let config = Config::from_vars(&vars)
            .map_err(|e| anyhow::anyhow!("Failed to create config: {}", e))?;

        // Create application state with a fresh store, keeping a handle so
        // tests can seed or inspect it directly
        let store = BookingStore::new();
        let state = Arc::new(AppState {
            store: store.clone(),
            config: config.clone(),
        });

        // Build routes using booking-service's real route builder
        let app = routes::build_routes(state);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind test server: {}", e))?;

        let addr = listener
            .local_addr()
            .map_err(|e| anyhow::anyhow!("Failed to get local address: {}", e))?;

        // Spawn server in background
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Test server error: {}", e);
            }
        });

        Ok(Self {
            addr,
            store,
            config,
            _handle: handle,
        })
    }

    /// Get a handle to the server's store.
    ///
    /// The handle shares state with the running server, so rooms and
    /// bookings created through it are visible over HTTP and vice versa.
    pub fn store(&self) -> &BookingStore {
        &self.store
    }

    /// Get the base URL of the test server.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Get the socket address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Get reference to the server configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Drop for TestBookingServer {
    fn drop(&mut self) {
        // Explicitly abort the HTTP server task to ensure immediate cleanup
        // when the test completes. This stops the server gracefully.
        self._handle.abort();
    }
}
