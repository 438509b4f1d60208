use crate::catalog::ProductCatalog;
use crate::directory::ClientDirectory;
use crate::ids::IdIssuer;
use serde::{Deserialize, Serialize};

/// The complete in-memory state: everything a snapshot saves and restores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    pub ids: IdIssuer,
    pub catalog: ProductCatalog,
    pub clients: ClientDirectory,
}

impl Warehouse {
    pub fn new() -> Self {
        Self::default()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{ClientId, ProductId};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    pub fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    pub struct WarehouseFixture {
        pub warehouse: Warehouse,
    }

    impl Default for WarehouseFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl WarehouseFixture {
        pub fn new() -> Self {
            Self {
                warehouse: Warehouse::new(),
            }
        }

        pub fn with_product(mut self, name: &str, price: &str, quantity: i64) -> Self {
            let id = self.warehouse.ids.next_product_id();
            self.warehouse
                .catalog
                .add(id, name.to_string(), dec(price), quantity)
                .unwrap();
            self
        }

        pub fn with_client(mut self, first: &str, last: &str) -> Self {
            let id = self.warehouse.ids.next_client_id();
            self.warehouse.clients.add(
                id,
                first.to_string(),
                last.to_string(),
                format!("{} Street", last),
                "555-0100".to_string(),
            );
            self
        }

        pub fn with_wish(mut self, client: &str, product: &str, quantity: i64) -> Self {
            let Warehouse {
                catalog, clients, ..
            } = &mut self.warehouse;
            clients
                .add_wishlist_item(
                    catalog,
                    &ClientId::from(client),
                    &ProductId::from(product),
                    quantity,
                )
                .unwrap();
            self
        }

        pub fn build(self) -> Warehouse {
            self.warehouse
        }
    }
}
