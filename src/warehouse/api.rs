//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It owns the
//! application state and the snapshot store and is the single entry point
//! for every warehouse operation, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the [`Warehouse`] state, constructed once at startup
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (raw id strings become typed ids)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## Generic Over SnapshotStore
//!
//! `WarehouseApi<S: SnapshotStore>` is generic over the storage backend:
//! - Production: `WarehouseApi<FileStore>`
//! - Testing: `WarehouseApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{ClientId, ProductId};
use crate::store::SnapshotStore;
use crate::warehouse::Warehouse;
use rust_decimal::Decimal;

/// The main API facade for warehouse operations.
pub struct WarehouseApi<S: SnapshotStore> {
    warehouse: Warehouse,
    store: S,
}

impl<S: SnapshotStore> WarehouseApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            warehouse: Warehouse::new(),
            store,
        }
    }

    pub fn add_client(&mut self, client: commands::NewClient) -> Result<commands::CmdResult> {
        commands::clients::add(&mut self.warehouse, client)
    }

    pub fn add_product(&mut self, product: commands::NewProduct) -> Result<commands::CmdResult> {
        commands::products::add(&mut self.warehouse, product)
    }

    pub fn list_clients(&self) -> Result<commands::CmdResult> {
        commands::clients::list(&self.warehouse)
    }

    pub fn list_products(&self) -> Result<commands::CmdResult> {
        commands::products::list(&self.warehouse)
    }

    pub fn add_to_wishlist(
        &mut self,
        client_id: &str,
        product_id: &str,
        quantity: i64,
    ) -> Result<commands::CmdResult> {
        commands::clients::add_to_wishlist(
            &mut self.warehouse,
            &ClientId::from(client_id),
            &ProductId::from(product_id),
            quantity,
        )
    }

    pub fn place_order(&mut self, client_id: &str) -> Result<commands::CmdResult> {
        commands::orders::place_order(&mut self.warehouse, &ClientId::from(client_id))
    }

    pub fn receive_payment(
        &mut self,
        client_id: &str,
        amount: Decimal,
    ) -> Result<commands::CmdResult> {
        commands::orders::receive_payment(&mut self.warehouse, &ClientId::from(client_id), amount)
    }

    pub fn receive_shipment(
        &mut self,
        product_id: &str,
        quantity: i64,
    ) -> Result<commands::CmdResult> {
        commands::products::receive_shipment(
            &mut self.warehouse,
            &ProductId::from(product_id),
            quantity,
        )
    }

    pub fn view_invoices(&self, client_id: &str) -> Result<commands::CmdResult> {
        commands::orders::view_invoices(&self.warehouse, &ClientId::from(client_id))
    }

    pub fn save(&mut self) -> Result<commands::CmdResult> {
        commands::snapshot::save(&mut self.store, &self.warehouse)
    }

    pub fn retrieve(&mut self) -> Result<commands::CmdResult> {
        commands::snapshot::retrieve(&self.store, &mut self.warehouse)
    }

    pub fn warehouse(&self) -> &Warehouse {
        &self.warehouse
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, NewClient, NewProduct};
