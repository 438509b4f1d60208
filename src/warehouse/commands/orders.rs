use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, WarehouseError};
use crate::model::ClientId;
use crate::orders::{self, ShortfallReason};
use crate::warehouse::Warehouse;
use rust_decimal::Decimal;

pub fn place_order(warehouse: &mut Warehouse, client_id: &ClientId) -> Result<CmdResult> {
    let outcome = orders::place_order(warehouse, client_id)?;
    let mut result = CmdResult::default();

    for shortfall in &outcome.shortfalls {
        let content = match shortfall.reason {
            ShortfallReason::InsufficientStock { available } => format!(
                "Skipped {}: wanted {}, only {} in stock (kept on wishlist)",
                shortfall.product_id, shortfall.requested, available
            ),
            ShortfallReason::UnknownProduct => format!(
                "Skipped {}: product no longer exists (kept on wishlist)",
                shortfall.product_id
            ),
        };
        result.add_message(CmdMessage::warning(content));
    }

    match outcome.invoice {
        Some(invoice) => {
            result.add_message(CmdMessage::success(format!(
                "Order placed for {}: {} line(s), total {:.2}",
                client_id,
                invoice.lines.len(),
                invoice.total
            )));
            Ok(result.with_invoices(vec![invoice]))
        }
        None => Ok(result.with_message(CmdMessage::warning(format!(
            "Nothing could be fulfilled for {}; no invoice created",
            client_id
        )))),
    }
}

pub fn receive_payment(
    warehouse: &mut Warehouse,
    client_id: &ClientId,
    amount: Decimal,
) -> Result<CmdResult> {
    let balance = orders::receive_payment(warehouse, client_id, amount)?;
    let content = if balance < Decimal::ZERO {
        format!(
            "Payment of {:.2} recorded for {}; client is in credit by {:.2}",
            amount,
            client_id,
            balance.abs()
        )
    } else {
        format!(
            "Payment of {:.2} recorded for {}; balance is now {:.2}",
            amount, client_id, balance
        )
    };
    Ok(CmdResult::default().with_message(CmdMessage::success(content)))
}

/// Invoices and payments for a client, closed by a statement line.
pub fn view_invoices(warehouse: &Warehouse, client_id: &ClientId) -> Result<CmdResult> {
    let invoices = orders::invoices(warehouse, client_id)?.to_vec();
    let payments = warehouse.clients.get(client_id)?.payments.clone();
    let mut result = CmdResult::default();
    if invoices.is_empty() {
        result.add_message(CmdMessage::info(format!("No invoices for {}.", client_id)));
    }

    match orders::statement(warehouse, client_id) {
        Ok(statement) => result.add_message(CmdMessage::info(format!(
            "Invoiced {:.2}, paid {:.2}, balance {:.2}",
            statement.invoiced, statement.paid, statement.balance
        ))),
        Err(WarehouseError::AmountOverflow(what)) => result.add_message(CmdMessage::warning(
            format!("Totals too large to summarize ({})", what),
        )),
        Err(e) => return Err(e),
    }

    Ok(result.with_invoices(invoices).with_payments(payments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::warehouse::fixtures::{dec, WarehouseFixture};

    fn jane() -> ClientId {
        ClientId::from("C1")
    }

    #[test]
    fn order_returns_invoice_and_success() {
        let mut warehouse = WarehouseFixture::new()
            .with_product("Widget", "9.99", 10)
            .with_client("Jane", "Doe")
            .with_wish("C1", "P1", 3)
            .build();

        let result = place_order(&mut warehouse, &jane()).unwrap();
        assert_eq!(result.invoices[0].total, dec("29.97"));
        assert!(result.messages[0].content.contains("total 29.97"));
    }

    #[test]
    fn shortfalls_become_warnings() {
        let mut warehouse = WarehouseFixture::new()
            .with_product("Widget", "9.99", 1)
            .with_client("Jane", "Doe")
            .with_wish("C1", "P1", 3)
            .build();

        let result = place_order(&mut warehouse, &jane()).unwrap();
        assert!(result.invoices.is_empty());
        assert!(result
            .messages
            .iter()
            .all(|m| m.level == MessageLevel::Warning));
        assert!(result.messages[0].content.contains("only 1 in stock"));
    }

    #[test]
    fn payment_message_reports_credit() {
        let mut warehouse = WarehouseFixture::new().with_client("Jane", "Doe").build();
        let result = receive_payment(&mut warehouse, &jane(), dec("12.5")).unwrap();
        assert!(result.messages[0].content.contains("in credit by 12.50"));
    }

    #[test]
    fn invoices_listed_after_orders() {
        let mut warehouse = WarehouseFixture::new()
            .with_product("Widget", "1.00", 10)
            .with_client("Jane", "Doe")
            .with_wish("C1", "P1", 1)
            .build();
        place_order(&mut warehouse, &jane()).unwrap();

        let result = view_invoices(&warehouse, &jane()).unwrap();
        assert_eq!(result.invoices.len(), 1);
        assert!(result.payments.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(
            result.messages[0].content,
            "Invoiced 1.00, paid 0.00, balance 1.00"
        );
    }

    #[test]
    fn payments_listed_with_statement() {
        let mut warehouse = WarehouseFixture::new()
            .with_product("Widget", "9.99", 10)
            .with_client("Jane", "Doe")
            .with_wish("C1", "P1", 3)
            .build();
        place_order(&mut warehouse, &jane()).unwrap();
        receive_payment(&mut warehouse, &jane(), dec("10")).unwrap();

        let result = view_invoices(&warehouse, &jane()).unwrap();
        assert_eq!(result.payments.len(), 1);
        assert_eq!(result.payments[0].amount, dec("10"));
        assert_eq!(
            result.messages[0].content,
            "Invoiced 29.97, paid 10.00, balance 19.97"
        );
    }

    #[test]
    fn oversized_payment_is_rejected() {
        let mut warehouse = WarehouseFixture::new().with_client("Jane", "Doe").build();
        receive_payment(&mut warehouse, &jane(), Decimal::MAX).unwrap();
        let err = receive_payment(&mut warehouse, &jane(), Decimal::MAX).unwrap_err();
        assert!(matches!(err, WarehouseError::AmountOverflow(_)));
    }

    #[test]
    fn invoices_for_unknown_client_fail() {
        let warehouse = Warehouse::new();
        assert!(view_invoices(&warehouse, &jane()).unwrap_err().is_not_found());
    }
}
