//! Store diagnostics entity
//!
//! Snapshot of store connectivity, reported by `GET /test`.

use serde::Serialize;

pub const BACKEND_RUNNING: &str = "✅ Running";
pub const DB_NOT_INITIALIZED: &str = "⚠️  Available but not initialized";
pub const DB_WORKING: &str = "✅ Connected & Working";
pub const CONNECTED: &str = "Connected";
pub const NOT_CONNECTED: &str = "Not Connected";
pub const SET: &str = "✅ Set";
pub const NOT_SET: &str = "❌ Not Set";

/// Number of collection names included in a status report
pub const MAX_REPORTED_COLLECTIONS: usize = 10;

/// Store connectivity report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreStatus {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl StoreStatus {
    /// Status for a process that has no store connection
    pub fn disconnected(database_url_set: bool, database_name_set: bool) -> Self {
        Self {
            backend: BACKEND_RUNNING.to_string(),
            database: DB_NOT_INITIALIZED.to_string(),
            database_url: set_marker(database_url_set),
            database_name: set_marker(database_name_set),
            connection_status: NOT_CONNECTED.to_string(),
            collections: Vec::new(),
        }
    }
}

pub fn set_marker(is_set: bool) -> String {
    let marker = if is_set { SET } else { NOT_SET };
    marker.to_string()
}
