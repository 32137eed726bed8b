//! Diagnostics service
//!
//! Reports store connectivity for operators. Not part of any data path.

use std::sync::Arc;

use crate::domain::entities::diagnostics::{CONNECTED, DB_WORKING, MAX_REPORTED_COLLECTIONS};
use crate::domain::entities::StoreStatus;
use crate::domain::ports::StoreProbe;
use crate::error::truncate_chars;

const MAX_PROBE_ERROR_CHARS: usize = 50;

pub struct DiagnosticsService {
    probe: Arc<dyn StoreProbe>,
    database_url_set: bool,
    database_name_set: bool,
}

impl DiagnosticsService {
    pub fn new(
        probe: Arc<dyn StoreProbe>,
        database_url_set: bool,
        database_name_set: bool,
    ) -> Self {
        Self {
            probe,
            database_url_set,
            database_name_set,
        }
    }

    /// Probe the store and build a status report. Never fails.
    pub async fn status(&self) -> StoreStatus {
        let mut status = StoreStatus::disconnected(self.database_url_set, self.database_name_set);

        if !self.probe.is_connected() {
            return status;
        }

        status.connection_status = CONNECTED.to_string();
        match self.probe.list_collections().await {
            Ok(mut collections) => {
                collections.truncate(MAX_REPORTED_COLLECTIONS);
                status.collections = collections;
                status.database = DB_WORKING.to_string();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Store probe failed");
                status.database = format!(
                    "⚠️  Connected but Error: {}",
                    truncate_chars(&e.to_string(), MAX_PROBE_ERROR_CHARS)
                );
            }
        }

        status
    }
}
