//! Application state shared with handlers.

use sea_orm::DatabaseConnection;

/// Shared state handed to every request handler.
///
/// The connection pool is the only shared resource; each request borrows a connection (or opens
/// a transaction) from it for its own duration.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
