use super::menu::MenuCommand;
use chrono::{DateTime, Utc};
use colored::Colorize;
use rust_decimal::Decimal;
use std::io::{self, Write};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use warehouse::api::{CmdMessage, MessageLevel};
use warehouse::config::WarehouseConfig;
use warehouse::model::{Client, Invoice, Payment, Product};

const NAME_WIDTH: usize = 28;
const ADDRESS_WIDTH: usize = 24;
const ID_WIDTH: usize = 6;
const NUMBER_WIDTH: usize = 10;

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Enter a number between 0 and {} as explained below:",
        MenuCommand::Help.number()
    )?;
    for command in MenuCommand::ALL {
        writeln!(out, "{:>2} {}", command.number(), command.description())?;
    }
    Ok(())
}

pub(super) fn print_products<W: Write>(
    out: &mut W,
    products: &[Product],
    config: &WarehouseConfig,
) -> io::Result<()> {
    if products.is_empty() {
        return Ok(());
    }
    writeln!(out, "\nProducts:")?;
    writeln!(
        out,
        "{}{}{}{}",
        pad("ID", ID_WIDTH),
        pad("Name", NAME_WIDTH),
        pad_left("Price", NUMBER_WIDTH),
        pad_left("Stock", NUMBER_WIDTH)
    )?;
    for product in products {
        writeln!(
            out,
            "{}{}{}{}",
            pad(product.id.as_str(), ID_WIDTH).yellow(),
            pad(&product.name, NAME_WIDTH),
            pad_left(&config.money(product.price), NUMBER_WIDTH),
            pad_left(&product.quantity.to_string(), NUMBER_WIDTH)
        )?;
    }
    Ok(())
}

pub(super) fn print_clients<W: Write>(
    out: &mut W,
    clients: &[Client],
    config: &WarehouseConfig,
) -> io::Result<()> {
    if clients.is_empty() {
        return Ok(());
    }
    writeln!(out, "\nClients:")?;
    writeln!(
        out,
        "{}{}{}{}{}",
        pad("ID", ID_WIDTH),
        pad("Name", NAME_WIDTH),
        pad("Address", ADDRESS_WIDTH),
        pad_left("Wishlist", NUMBER_WIDTH),
        pad_left("Balance", NUMBER_WIDTH)
    )?;
    for client in clients {
        let wanted: u64 = client
            .wishlist
            .iter()
            .map(|item| u64::from(item.quantity))
            .sum();
        let balance = config.money(client.balance);
        let balance = pad_left(&balance, NUMBER_WIDTH);
        let balance = if client.balance < Decimal::ZERO {
            balance.green()
        } else {
            balance.normal()
        };
        writeln!(
            out,
            "{}{}{}{}{}",
            pad(client.id.as_str(), ID_WIDTH).yellow(),
            pad(&client.full_name(), NAME_WIDTH),
            pad(&client.address, ADDRESS_WIDTH),
            pad_left(&wanted.to_string(), NUMBER_WIDTH),
            balance
        )?;
    }
    Ok(())
}

pub(super) fn print_invoices<W: Write>(
    out: &mut W,
    invoices: &[Invoice],
    config: &WarehouseConfig,
) -> io::Result<()> {
    for (i, invoice) in invoices.iter().enumerate() {
        writeln!(
            out,
            "\n{} {} {}",
            format!("Invoice {}", i + 1).bold(),
            invoice.created_at.format("%Y-%m-%d %H:%M"),
            format_time_ago(invoice.created_at).dimmed()
        )?;
        for line in &invoice.lines {
            writeln!(
                out,
                "  {}{}{}{}",
                pad(&line.product_name, NAME_WIDTH),
                pad_left(&line.quantity.to_string(), NUMBER_WIDTH / 2),
                pad_left(&config.money(line.unit_price), NUMBER_WIDTH),
                pad_left(&config.money(line.line_total), NUMBER_WIDTH)
            )?;
        }
        writeln!(out, "  Total: {}", config.money(invoice.total).bold())?;
    }
    Ok(())
}

pub(super) fn print_payments<W: Write>(
    out: &mut W,
    payments: &[Payment],
    config: &WarehouseConfig,
) -> io::Result<()> {
    if payments.is_empty() {
        return Ok(());
    }
    writeln!(out, "\n{}", "Payments:".bold())?;
    for payment in payments {
        writeln!(
            out,
            "  {}{}",
            pad(&payment.received_at.format("%Y-%m-%d %H:%M").to_string(), NAME_WIDTH),
            pad_left(&config.money(payment.amount), NUMBER_WIDTH)
        )?;
    }
    Ok(())
}

fn pad(s: &str, width: usize) -> String {
    let shown = truncate_to_width(s, width.saturating_sub(1));
    let padding = width.saturating_sub(shown.width());
    format!("{}{}", shown, " ".repeat(padding))
}

fn pad_left(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", " ".repeat(padding), s)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = Formatter::new();
    format!("({})", formatter.convert(duration.to_std().unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use warehouse::model::{ClientId, ProductId, WishlistItem};

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8_lossy(&out).into_owned()
    }

    #[test]
    fn pads_to_display_width() {
        assert_eq!(pad("ab", 5), "ab   ");
        assert_eq!(pad_left("7", 3), "  7");
        assert_eq!(pad("日本", 6).width(), 6);
    }

    #[test]
    fn truncates_long_names() {
        let shown = pad("An extremely long product name", 10);
        assert!(shown.contains('…'));
        assert_eq!(shown.width(), 10);
    }

    #[test]
    fn help_lists_every_command() {
        let text = render(|out| print_help(out));
        assert!(text.contains("between 0 and 12"));
        assert!(text.contains(" 6 to place an order for a client"));
        assert!(text.contains("12 for help"));
    }

    #[test]
    fn product_table_shows_money_and_stock() {
        let widget = Product::new(
            ProductId::from("P1"),
            "Widget".into(),
            Decimal::from_str("9.99").unwrap(),
            7,
        );
        let text = render(|out| print_products(out, &[widget], &WarehouseConfig::default()));
        assert!(text.contains("Widget"));
        assert!(text.contains("$9.99"));
        assert!(text.contains('7'));
    }

    #[test]
    fn empty_tables_print_nothing() {
        let text = render(|out| print_clients(out, &[], &WarehouseConfig::default()));
        assert!(text.is_empty());
        let text = render(|out| print_payments(out, &[], &WarehouseConfig::default()));
        assert!(text.is_empty());
    }

    #[test]
    fn wishlist_total_does_not_wrap() {
        let mut client = Client::new(
            ClientId::from("C1"),
            "Jane".into(),
            "Doe".into(),
            "1 Main St".into(),
            "555-0100".into(),
        );
        for product in ["P1", "P2"] {
            client.wishlist.push(WishlistItem {
                product_id: ProductId::from(product),
                quantity: 3_000_000_000,
            });
        }
        let text = render(|out| print_clients(out, &[client], &WarehouseConfig::default()));
        assert!(text.contains("6000000000"));
    }

    #[test]
    fn payments_show_amounts() {
        let payment = Payment {
            amount: Decimal::from_str("12.50").unwrap(),
            received_at: Utc::now(),
        };
        let text = render(|out| print_payments(out, &[payment], &WarehouseConfig::default()));
        assert!(text.contains("Payments:"));
        assert!(text.contains("$12.50"));
    }
}
