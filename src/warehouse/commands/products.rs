use crate::catalog::to_quantity;
use crate::commands::{CmdMessage, CmdResult, NewProduct};
use crate::error::{Result, WarehouseError};
use crate::model::ProductId;
use crate::warehouse::Warehouse;
use rust_decimal::Decimal;

pub fn add(warehouse: &mut Warehouse, new: NewProduct) -> Result<CmdResult> {
    // Rejected products must not consume an id.
    to_quantity(new.quantity)?;
    if new.price < Decimal::ZERO {
        return Err(WarehouseError::InvalidAmount(new.price));
    }

    let id = warehouse.ids.next_product_id();
    let product = warehouse
        .catalog
        .add(id, new.name, new.price, new.quantity)?
        .clone();

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Product added: {}", product)))
        .with_products(vec![product]))
}

pub fn list(warehouse: &Warehouse) -> Result<CmdResult> {
    let products: Vec<_> = warehouse.catalog.list_all().cloned().collect();
    let mut result = CmdResult::default();
    if products.is_empty() {
        result.add_message(CmdMessage::info("No products yet."));
    }
    Ok(result.with_products(products))
}

pub fn receive_shipment(
    warehouse: &mut Warehouse,
    product_id: &ProductId,
    quantity: i64,
) -> Result<CmdResult> {
    let product = warehouse
        .catalog
        .receive_shipment(product_id, quantity)?
        .clone();

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Received {} of {}; {} now in stock",
            quantity, product.name, product.quantity
        )))
        .with_products(vec![product]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::warehouse::fixtures::{dec, WarehouseFixture};

    fn widget(quantity: i64) -> NewProduct {
        NewProduct {
            name: "Widget".into(),
            price: dec("9.99"),
            quantity,
        }
    }

    #[test]
    fn add_then_find_yields_equal_record() {
        let mut warehouse = Warehouse::new();
        let result = add(&mut warehouse, widget(10)).unwrap();

        let added = &result.products[0];
        assert_eq!(added.id, ProductId::from("P1"));
        assert_eq!(warehouse.catalog.find(&added.id), Some(added));
    }

    #[test]
    fn rejected_product_does_not_consume_an_id() {
        let mut warehouse = Warehouse::new();
        let err = add(&mut warehouse, widget(-1)).unwrap_err();
        assert!(matches!(err, WarehouseError::InvalidQuantity(-1)));

        let err = add(
            &mut warehouse,
            NewProduct {
                price: dec("-1"),
                ..widget(1)
            },
        )
        .unwrap_err();
        assert!(matches!(err, WarehouseError::InvalidAmount(_)));

        let result = add(&mut warehouse, widget(1)).unwrap();
        assert_eq!(result.products[0].id, ProductId::from("P1"));
    }

    #[test]
    fn shipment_reports_new_stock() {
        let mut warehouse = WarehouseFixture::new()
            .with_product("Widget", "9.99", 10)
            .build();
        let result = receive_shipment(&mut warehouse, &ProductId::from("P1"), 4).unwrap();

        assert_eq!(result.products[0].quantity, 14);
        assert!(result.messages[0].content.contains("14 now in stock"));
    }

    #[test]
    fn shipment_unknown_product_is_not_found() {
        let mut warehouse = Warehouse::new();
        let err = receive_shipment(&mut warehouse, &ProductId::from("P1"), 4).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn list_returns_catalog() {
        let warehouse = WarehouseFixture::new()
            .with_product("Widget", "9.99", 10)
            .with_product("Gadget", "1.00", 0)
            .build();
        let result = list(&warehouse).unwrap();
        assert_eq!(result.products.len(), 2);
        assert!(result.messages.is_empty());
    }
}
