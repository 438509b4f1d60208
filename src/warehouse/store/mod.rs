//! # Storage Layer
//!
//! Persistence is whole-state snapshotting: the entire [`Warehouse`]
//! (catalog, client directory and id counters) is written as one artifact and
//! read back as one artifact. The [`SnapshotStore`] trait keeps the API
//! independent of where that artifact lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - A single pretty-printed JSON file (`warehouse.json` by default)
//!   - Parent directory is created on the first save
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Keeps the last saved snapshot
//!   - Fast, isolated test execution
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── warehouse.json      # Snapshot: ids, catalog, clients
//! └── config.json         # Optional configuration
//! ```
//!
//! Restoring replaces the in-memory state wholesale. A failed save or
//! retrieve never touches the state that is currently loaded.

use crate::error::Result;
use crate::warehouse::Warehouse;

pub mod fs;
pub mod memory;

/// Abstract interface for snapshot persistence.
pub trait SnapshotStore {
    /// Persist the full state, replacing any previous snapshot
    fn save(&mut self, warehouse: &Warehouse) -> Result<()>;

    /// Load the last saved state
    fn retrieve(&self) -> Result<Warehouse>;

    /// Human readable location of the snapshot, for messages
    fn location(&self) -> String;
}
