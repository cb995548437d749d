//! Application state.

use sea_orm::DatabaseConnection;

/// State shared by every HTTP handler.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the company store and geo catalog
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
