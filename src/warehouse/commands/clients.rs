use crate::commands::{CmdMessage, CmdResult, NewClient};
use crate::error::Result;
use crate::model::{ClientId, ProductId};
use crate::warehouse::Warehouse;

pub fn add(warehouse: &mut Warehouse, new: NewClient) -> Result<CmdResult> {
    let id = warehouse.ids.next_client_id();
    let client = warehouse
        .clients
        .add(id, new.first_name, new.last_name, new.address, new.phone)
        .clone();

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Client added: {}", client)))
        .with_clients(vec![client]))
}

pub fn list(warehouse: &Warehouse) -> Result<CmdResult> {
    let clients: Vec<_> = warehouse.clients.list_all().cloned().collect();
    let mut result = CmdResult::default();
    if clients.is_empty() {
        result.add_message(CmdMessage::info("No clients yet."));
    }
    Ok(result.with_clients(clients))
}

pub fn add_to_wishlist(
    warehouse: &mut Warehouse,
    client_id: &ClientId,
    product_id: &ProductId,
    quantity: i64,
) -> Result<CmdResult> {
    let Warehouse {
        catalog, clients, ..
    } = warehouse;
    let item = clients.add_wishlist_item(catalog, client_id, product_id, quantity)?;
    let wanted = item.quantity;

    let name = catalog
        .find(product_id)
        .map(|p| p.name.as_str())
        .unwrap_or_default();
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Wishlist for {} now has {} x {} ({})",
        client_id, wanted, name, product_id
    ))))
}
