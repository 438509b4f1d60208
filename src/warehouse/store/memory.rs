use super::SnapshotStore;
use crate::error::{Result, WarehouseError};
use crate::warehouse::Warehouse;
use std::path::PathBuf;

const LOCATION: &str = "memory";

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    snapshot: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }
}

impl SnapshotStore for InMemoryStore {
    // Stored as JSON, the same encoding FileStore writes.
    fn save(&mut self, warehouse: &Warehouse) -> Result<()> {
        self.snapshot = Some(serde_json::to_string(warehouse)?);
        Ok(())
    }

    fn retrieve(&self) -> Result<Warehouse> {
        let snapshot = self
            .snapshot
            .as_deref()
            .ok_or_else(|| WarehouseError::SnapshotNotFound(PathBuf::from(LOCATION)))?;
        Ok(serde_json::from_str(snapshot)?)
    }

    fn location(&self) -> String {
        LOCATION.to_string()
    }
}
