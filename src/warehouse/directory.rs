use crate::catalog::{to_quantity, ProductCatalog};
use crate::error::{Result, WarehouseError};
use crate::model::{Client, ClientId, ProductId, WishlistItem};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Registered clients, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientDirectory {
    clients: Vec<Client>,
}

impl ClientDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        id: ClientId,
        first_name: String,
        last_name: String,
        address: String,
        phone: String,
    ) -> &Client {
        debug!(%id, %first_name, %last_name, "adding client");
        self.clients
            .push(Client::new(id, first_name, last_name, address, phone));
        let index = self.clients.len() - 1;
        &self.clients[index]
    }

    pub fn find(&self, id: &ClientId) -> Option<&Client> {
        self.clients.iter().find(|c| &c.id == id)
    }

    pub fn find_mut(&mut self, id: &ClientId) -> Option<&mut Client> {
        self.clients.iter_mut().find(|c| &c.id == id)
    }

    pub fn get(&self, id: &ClientId) -> Result<&Client> {
        self.find(id)
            .ok_or_else(|| WarehouseError::ClientNotFound(id.clone()))
    }

    pub fn get_mut(&mut self, id: &ClientId) -> Result<&mut Client> {
        self.find_mut(id)
            .ok_or_else(|| WarehouseError::ClientNotFound(id.clone()))
    }

    pub fn list_all(&self) -> impl Iterator<Item = &Client> {
        self.clients.iter()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Appends to the client's wishlist, merging with an existing entry for
    /// the same product. Both ids must be known.
    pub fn add_wishlist_item(
        &mut self,
        catalog: &ProductCatalog,
        client_id: &ClientId,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<&WishlistItem> {
        let client = self.get_mut(client_id)?;
        if !catalog.contains(product_id) {
            return Err(WarehouseError::ProductNotFound(product_id.clone()));
        }
        let quantity = match to_quantity(quantity)? {
            0 => return Err(WarehouseError::InvalidQuantity(0)),
            n => n,
        };

        let position = match client
            .wishlist
            .iter()
            .position(|item| &item.product_id == product_id)
        {
            Some(pos) => {
                let item = &mut client.wishlist[pos];
                item.quantity = item
                    .quantity
                    .checked_add(quantity)
                    .ok_or(WarehouseError::InvalidQuantity(i64::from(quantity)))?;
                pos
            }
            None => {
                client.wishlist.push(WishlistItem {
                    product_id: product_id.clone(),
                    quantity,
                });
                client.wishlist.len() - 1
            }
        };

        let item = &client.wishlist[position];
        debug!(%client_id, %product_id, wanted = item.quantity, "wishlist updated");
        Ok(item)
    }
}
