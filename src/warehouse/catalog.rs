use crate::error::{Result, WarehouseError};
use crate::model::{Product, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Products on hand, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        id: ProductId,
        name: String,
        price: Decimal,
        quantity: i64,
    ) -> Result<&Product> {
        if price < Decimal::ZERO {
            return Err(WarehouseError::InvalidAmount(price));
        }
        let quantity = to_quantity(quantity)?;

        debug!(%id, %name, %price, quantity, "adding product");
        self.products.push(Product::new(id, name, price, quantity));
        let index = self.products.len() - 1;
        Ok(&self.products[index])
    }

    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn find_mut(&mut self, id: &ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| &p.id == id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.find(id).is_some()
    }

    pub fn list_all(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn receive_shipment(&mut self, id: &ProductId, quantity: i64) -> Result<&Product> {
        let quantity = to_quantity(quantity)?;
        let product = self
            .find_mut(id)
            .ok_or_else(|| WarehouseError::ProductNotFound(id.clone()))?;

        product.quantity = product
            .quantity
            .checked_add(quantity)
            .ok_or(WarehouseError::InvalidQuantity(i64::from(quantity)))?;
        debug!(%id, received = quantity, on_hand = product.quantity, "shipment received");
        Ok(product)
    }
}

/// Converts a user supplied count into a stock quantity, rejecting negatives.
pub(crate) fn to_quantity(quantity: i64) -> Result<u32> {
    u32::try_from(quantity).map_err(|_| WarehouseError::InvalidQuantity(quantity))
}
