use super::SnapshotStore;
use crate::error::{Result, WarehouseError};
use crate::warehouse::Warehouse;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

pub const DEFAULT_SNAPSHOT_FILE: &str = "warehouse.json";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at `<dir>/<file_name>`.
    pub fn in_dir<P: AsRef<Path>>(dir: P, file_name: &str) -> Self {
        Self::new(dir.as_ref().join(file_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(WarehouseError::Io)?;
            }
        }
        Ok(())
    }
}

impl SnapshotStore for FileStore {
    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn save(&mut self, warehouse: &Warehouse) -> Result<()> {
        self.ensure_parent()?;
        let content =
            serde_json::to_string_pretty(warehouse).map_err(WarehouseError::Serialization)?;
        fs::write(&self.path, content).map_err(WarehouseError::Io)?;
        debug!(
            clients = warehouse.clients.len(),
            products = warehouse.catalog.len(),
            "snapshot written"
        );
        Ok(())
    }

    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn retrieve(&self) -> Result<Warehouse> {
        if !self.path.exists() {
            return Err(WarehouseError::SnapshotNotFound(self.path.clone()));
        }
        let content = fs::read_to_string(&self.path).map_err(WarehouseError::Io)?;
        let warehouse: Warehouse =
            serde_json::from_str(&content).map_err(WarehouseError::Serialization)?;
        debug!(
            clients = warehouse.clients.len(),
            products = warehouse.catalog.len(),
            "snapshot read"
        );
        Ok(warehouse)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClientId, ProductId};
    use crate::orders::place_order;
    use crate::warehouse::fixtures::WarehouseFixture;

    #[test]
    fn round_trip_preserves_everything() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::in_dir(dir.path(), DEFAULT_SNAPSHOT_FILE);

        let mut warehouse = WarehouseFixture::new()
            .with_product("Widget", "9.99", 10)
            .with_product("Gadget", "4.50", 2)
            .with_client("Jane", "Doe")
            .with_wish("C1", "P1", 3)
            .with_wish("C1", "P2", 5)
            .build();
        place_order(&mut warehouse, &ClientId::from("C1")).unwrap();

        store.save(&warehouse).unwrap();
        let restored = store.retrieve().unwrap();

        assert_eq!(restored, warehouse);
        let jane = restored.clients.get(&ClientId::from("C1")).unwrap();
        assert_eq!(jane.invoices.len(), 1);
        assert_eq!(jane.wishlist[0].product_id, ProductId::from("P2"));
    }

    #[test]
    fn restored_counters_continue() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::in_dir(dir.path(), DEFAULT_SNAPSHOT_FILE);
        let warehouse = WarehouseFixture::new()
            .with_client("Jane", "Doe")
            .with_product("Widget", "1", 1)
            .build();
        store.save(&warehouse).unwrap();

        let mut restored = store.retrieve().unwrap();
        assert_eq!(restored.ids.next_client_id(), ClientId::from("C2"));
        assert_eq!(restored.ids.next_product_id(), ProductId::from("P2"));
    }

    #[test]
    fn creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let mut store = FileStore::in_dir(&nested, "state.json");
        store.save(&Warehouse::new()).unwrap();
        assert!(nested.join("state.json").exists());
    }

    #[test]
    fn missing_snapshot_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::in_dir(dir.path(), DEFAULT_SNAPSHOT_FILE);
        let err = store.retrieve().unwrap_err();
        assert!(matches!(err, WarehouseError::SnapshotNotFound(_)));
        assert!(err.is_persistence_failure());
    }

    #[test]
    fn corrupt_snapshot_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::in_dir(dir.path(), DEFAULT_SNAPSHOT_FILE);
        fs::write(store.path(), "{ not json").unwrap();
        let err = store.retrieve().unwrap_err();
        assert!(matches!(err, WarehouseError::Serialization(_)));
    }
}
