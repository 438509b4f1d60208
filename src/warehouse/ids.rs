//! Sequential identifiers for clients and products.
//!
//! The issuer is plain state inside [`crate::warehouse::Warehouse`] and is
//! serialized with it, so a restored snapshot keeps counting from where it
//! stopped.

use crate::model::{ClientId, ProductId};
use serde::{Deserialize, Serialize};

const CLIENT_PREFIX: &str = "C";
const PRODUCT_PREFIX: &str = "P";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdIssuer {
    /// Number of client ids issued so far.
    client_counter: u64,
    /// Number of product ids issued so far.
    product_counter: u64,
}

impl IdIssuer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_client_id(&mut self) -> ClientId {
        self.client_counter += 1;
        ClientId::from(format!("{}{}", CLIENT_PREFIX, self.client_counter))
    }

    pub fn next_product_id(&mut self) -> ProductId {
        self.product_counter += 1;
        ProductId::from(format!("{}{}", PRODUCT_PREFIX, self.product_counter))
    }
}
