use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SnapshotStore;
use crate::warehouse::Warehouse;
use tracing::{info, warn};

pub fn save<S: SnapshotStore>(store: &mut S, warehouse: &Warehouse) -> Result<CmdResult> {
    if let Err(e) = store.save(warehouse) {
        warn!(error = %e, "save failed");
        return Err(e);
    }
    info!(location = %store.location(), "warehouse saved");
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "The warehouse has been successfully saved to {}.",
        store.location()
    ))))
}

/// Replaces `warehouse` with the stored snapshot. On failure the current
/// state is left as it was.
pub fn retrieve<S: SnapshotStore>(store: &S, warehouse: &mut Warehouse) -> Result<CmdResult> {
    let restored = match store.retrieve() {
        Ok(restored) => restored,
        Err(e) => {
            warn!(error = %e, "retrieve failed");
            return Err(e);
        }
    };
    *warehouse = restored;
    info!(
        clients = warehouse.clients.len(),
        products = warehouse.catalog.len(),
        "warehouse retrieved"
    );
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "The warehouse has been successfully retrieved ({} clients, {} products).",
        warehouse.clients.len(),
        warehouse.catalog.len()
    ))))
}
