//! # Order Processing
//!
//! Placing an order walks a client's wishlist in order and fulfills every
//! entry the catalog can fully cover. Entries that stock cannot cover are
//! skipped, reported as [`Shortfall`]s and left on the wishlist, so a later
//! shipment followed by another order picks them up.
//!
//! An invoice exists only when at least one line was fulfilled. It is
//! appended to the client's history and its total added to the balance.

use crate::error::{Result, WarehouseError};
use crate::model::{ClientId, Invoice, LineItem, Payment, ProductId, WishlistItem};
use crate::warehouse::Warehouse;
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, instrument, warn};

/// Why a wishlist entry was left unfulfilled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortfallReason {
    /// Stock on hand is below the requested quantity.
    InsufficientStock { available: u32 },
    /// The product is not in the catalog. Products are never removed, so
    /// this only happens with a snapshot edited by hand.
    UnknownProduct,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortfall {
    pub product_id: ProductId,
    pub requested: u32,
    pub reason: ShortfallReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderOutcome {
    pub invoice: Option<Invoice>,
    pub shortfalls: Vec<Shortfall>,
}

#[instrument(skip_all, fields(client = %client_id))]
pub fn place_order(warehouse: &mut Warehouse, client_id: &ClientId) -> Result<OrderOutcome> {
    let Warehouse {
        catalog, clients, ..
    } = warehouse;
    let client = clients.get_mut(client_id)?;
    if client.wishlist.is_empty() {
        return Err(WarehouseError::EmptyWishlist(client_id.clone()));
    }

    // Stock is reserved on a copy and committed only once every total fits.
    let mut reserved = catalog.clone();
    let mut lines = Vec::new();
    let mut shortfalls = Vec::new();
    let mut remaining: Vec<WishlistItem> = Vec::new();

    for item in &client.wishlist {
        let Some(product) = reserved.find_mut(&item.product_id) else {
            warn!(product = %item.product_id, "wishlist product missing from catalog");
            shortfalls.push(Shortfall {
                product_id: item.product_id.clone(),
                requested: item.quantity,
                reason: ShortfallReason::UnknownProduct,
            });
            remaining.push(item.clone());
            continue;
        };

        if product.quantity < item.quantity {
            warn!(
                product = %product.id,
                requested = item.quantity,
                available = product.quantity,
                "insufficient stock, leaving on wishlist"
            );
            shortfalls.push(Shortfall {
                product_id: item.product_id.clone(),
                requested: item.quantity,
                reason: ShortfallReason::InsufficientStock {
                    available: product.quantity,
                },
            });
            remaining.push(item.clone());
            continue;
        }

        lines.push(LineItem::new(product, item.quantity)?);
        product.quantity -= item.quantity;
    }

    if lines.is_empty() {
        info!(skipped = shortfalls.len(), "nothing fulfilled, no invoice");
        return Ok(OrderOutcome {
            invoice: None,
            shortfalls,
        });
    }

    let invoice = Invoice::new(client_id.clone(), lines)?;
    let balance = client
        .balance
        .checked_add(invoice.total)
        .ok_or_else(|| WarehouseError::AmountOverflow(format!("balance of {}", client_id)))?;

    *catalog = reserved;
    client.wishlist = remaining;
    client.balance = balance;
    client.invoices.push(invoice.clone());
    info!(
        total = %invoice.total,
        lines = invoice.lines.len(),
        skipped = shortfalls.len(),
        "order placed"
    );

    Ok(OrderOutcome {
        invoice: Some(invoice),
        shortfalls,
    })
}

/// Records a payment. Overpayment leaves the client in credit.
pub fn receive_payment(
    warehouse: &mut Warehouse,
    client_id: &ClientId,
    amount: Decimal,
) -> Result<Decimal> {
    let client = warehouse.clients.get_mut(client_id)?;
    if amount <= Decimal::ZERO {
        return Err(WarehouseError::InvalidAmount(amount));
    }

    client.balance = client
        .balance
        .checked_sub(amount)
        .ok_or_else(|| WarehouseError::AmountOverflow(format!("balance of {}", client_id)))?;
    client.payments.push(Payment {
        amount,
        received_at: Utc::now(),
    });
    info!(client = %client_id, %amount, balance = %client.balance, "payment received");
    Ok(client.balance)
}

/// What a client has been invoiced and has paid. `balance` always equals
/// `invoiced - paid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub invoiced: Decimal,
    pub paid: Decimal,
    pub balance: Decimal,
}

pub fn statement(warehouse: &Warehouse, client_id: &ClientId) -> Result<Statement> {
    let client = warehouse.clients.get(client_id)?;
    let overflow = || WarehouseError::AmountOverflow(format!("statement of {}", client_id));
    let invoiced = client
        .invoices
        .iter()
        .try_fold(Decimal::ZERO, |sum, invoice| sum.checked_add(invoice.total))
        .ok_or_else(overflow)?;
    let paid = client
        .payments
        .iter()
        .try_fold(Decimal::ZERO, |sum, payment| sum.checked_add(payment.amount))
        .ok_or_else(overflow)?;
    Ok(Statement {
        invoiced,
        paid,
        balance: client.balance,
    })
}

pub fn invoices<'a>(warehouse: &'a Warehouse, client_id: &ClientId) -> Result<&'a [Invoice]> {
    Ok(&warehouse.clients.get(client_id)?.invoices)
}
