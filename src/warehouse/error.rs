use crate::model::{ClientId, ProductId};
use rust_decimal::Decimal;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WarehouseError {
    #[error("Client not found: {0}")]
    ClientNotFound(ClientId),

    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("Invalid amount: {0}")]
    InvalidAmount(Decimal),

    #[error("Amount out of range: {0}")]
    AmountOverflow(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    #[error("Wishlist is empty for client {0}")]
    EmptyWishlist(ClientId),

    #[error("No saved data found at {}", .0.display())]
    SnapshotNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Input stream closed")]
    InputClosed,
}

impl WarehouseError {
    /// Unknown client or product id.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            WarehouseError::ClientNotFound(_) | WarehouseError::ProductNotFound(_)
        )
    }

    /// Save/retrieve failures. These never touch the in-memory state.
    pub fn is_persistence_failure(&self) -> bool {
        matches!(
            self,
            WarehouseError::SnapshotNotFound(_)
                | WarehouseError::Io(_)
                | WarehouseError::Serialization(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, WarehouseError>;
