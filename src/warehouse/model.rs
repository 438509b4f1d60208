use crate::error::{Result, WarehouseError};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

macro_rules! string_id {
    ($ty:ident) => {
        impl $ty {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $ty {
            fn from(s: &str) -> Self {
                Self(s.trim().to_string())
            }
        }

        impl From<String> for $ty {
            fn from(s: String) -> Self {
                Self::from(s.as_str())
            }
        }
    };
}

string_id!(ClientId);
string_id!(ProductId);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl Product {
    pub fn new(id: ProductId, name: String, price: Decimal, quantity: u32) -> Self {
        Self {
            id,
            name,
            price,
            quantity,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} price {:.2} in stock {}",
            self.id, self.name, self.price, self.quantity
        )
    }
}

/// A pending request for `quantity` units of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

impl LineItem {
    pub fn new(product: &Product, quantity: u32) -> Result<Self> {
        let line_total = product
            .price
            .checked_mul(Decimal::from(quantity))
            .ok_or_else(|| {
                WarehouseError::AmountOverflow(format!("{} x {}", quantity, product.id))
            })?;
        Ok(Self {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            quantity,
            unit_price: product.price,
            line_total,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub client_id: ClientId,
    pub lines: Vec<LineItem>,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Invoice {
    pub fn new(client_id: ClientId, lines: Vec<LineItem>) -> Result<Self> {
        let total = lines
            .iter()
            .try_fold(Decimal::ZERO, |sum, line| sum.checked_add(line.line_total))
            .ok_or_else(|| WarehouseError::AmountOverflow(format!("invoice for {}", client_id)))?;
        Ok(Self {
            client_id,
            lines,
            total,
            created_at: Utc::now(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub amount: Decimal,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone: String,
    #[serde(default)]
    pub wishlist: Vec<WishlistItem>,
    #[serde(default)]
    pub invoices: Vec<Invoice>,
    #[serde(default)]
    pub payments: Vec<Payment>,
    /// Amount owed. Negative means the client is in credit.
    pub balance: Decimal,
}

impl Client {
    pub fn new(
        id: ClientId,
        first_name: String,
        last_name: String,
        address: String,
        phone: String,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            address,
            phone,
            wishlist: Vec::new(),
            invoices: Vec::new(),
            payments: Vec::new(),
            balance: Decimal::ZERO,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}, {}) balance {:.2}",
            self.id,
            self.full_name(),
            self.address,
            self.phone,
            self.balance
        )
    }
}
