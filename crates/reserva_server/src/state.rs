//! Application state for the HTTP server.

use reserva_core::rusqlite::Connection;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared application state passed to all handlers.
///
/// The SQLite connection is injected here at startup and threaded through
/// explicitly; no handler reaches for process-wide globals.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Wraps a migrated connection for shared handler access.
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }
}
