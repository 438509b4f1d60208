use super::menu::{MenuCommand, UnknownCommand};
use super::print::{
    print_clients, print_help, print_invoices, print_messages, print_payments, print_products,
};
use super::prompt::Prompter;
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::debug;
use warehouse::api::{CmdResult, NewClient, NewProduct, WarehouseApi};
use warehouse::config::WarehouseConfig;
use warehouse::error::{Result, WarehouseError};
use warehouse::store::SnapshotStore;

type Handler<R, W, S> = fn(&mut Controller<R, W, S>) -> Result<()>;

/// The interactive menu loop.
pub struct Controller<R, W, S: SnapshotStore> {
    api: WarehouseApi<S>,
    prompter: Prompter<R, W>,
    config: WarehouseConfig,
}

impl<R: BufRead, W: Write, S: SnapshotStore> Controller<R, W, S> {
    pub fn new(api: WarehouseApi<S>, prompter: Prompter<R, W>, config: WarehouseConfig) -> Self {
        Self {
            api,
            prompter,
            config,
        }
    }

    /// `None` means leave the loop.
    fn handler(command: MenuCommand) -> Option<Handler<R, W, S>> {
        let handler: Handler<R, W, S> = match command {
            MenuCommand::Exit => return None,
            MenuCommand::AddClient => Self::add_client,
            MenuCommand::AddProduct => Self::add_product,
            MenuCommand::ViewClients => Self::view_clients,
            MenuCommand::ViewProducts => Self::view_products,
            MenuCommand::AddToWishlist => Self::add_to_wishlist,
            MenuCommand::PlaceOrder => Self::place_order,
            MenuCommand::ReceivePayment => Self::receive_payment,
            MenuCommand::ReceiveShipment => Self::receive_shipment,
            MenuCommand::ViewInvoices => Self::view_invoices,
            MenuCommand::Save => Self::save,
            MenuCommand::Retrieve => Self::retrieve,
            MenuCommand::Help => Self::help,
        };
        Some(handler)
    }

    /// Offers to restore saved data before the menu starts.
    pub fn startup(&mut self) -> Result<()> {
        let wants_restore = match self.prompter.yes_or_no("Look for saved data and use it?") {
            Ok(answer) => answer,
            Err(WarehouseError::InputClosed) => return Ok(()),
            Err(e) => return Err(e),
        };
        if !wants_restore {
            return Ok(());
        }

        match self.api.retrieve() {
            Ok(result) => self.show(&result),
            Err(WarehouseError::SnapshotNotFound(_)) => {
                writeln!(
                    self.prompter.out(),
                    "{}",
                    "No saved warehouse data found. Starting fresh.".dimmed()
                )?;
                Ok(())
            }
            Err(e) => self.report(&e),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        self.help()?;
        loop {
            let number = match self.prompter.get_number("Enter command (12 for help):") {
                Ok(n) => n,
                Err(WarehouseError::InputClosed) => return Ok(()),
                Err(e) => return Err(e),
            };
            let command = match MenuCommand::try_from(number) {
                Ok(command) => command,
                Err(UnknownCommand(n)) => {
                    let message = format!("Invalid command {}. Try again.", n);
                    writeln!(self.prompter.out(), "{}", message.red())?;
                    continue;
                }
            };
            debug!(?command, "dispatching");

            let Some(handler) = Self::handler(command) else {
                return Ok(());
            };
            match handler(self) {
                Ok(()) => {}
                Err(WarehouseError::InputClosed) => return Ok(()),
                Err(e) => self.report(&e)?,
            }
        }
    }

    fn report(&mut self, error: &WarehouseError) -> Result<()> {
        writeln!(self.prompter.out(), "{}", error.to_string().red())?;
        Ok(())
    }

    fn show(&mut self, result: &CmdResult) -> Result<()> {
        let out = self.prompter.out();
        print_products(out, &result.products, &self.config)?;
        print_clients(out, &result.clients, &self.config)?;
        print_invoices(out, &result.invoices, &self.config)?;
        print_payments(out, &result.payments, &self.config)?;
        print_messages(out, &result.messages)?;
        Ok(())
    }

    /// Like [`Self::show`] but without the record tables, for mutations whose
    /// success message already names the record.
    fn show_messages(&mut self, result: &CmdResult) -> Result<()> {
        print_messages(self.prompter.out(), &result.messages)?;
        Ok(())
    }

    fn help(&mut self) -> Result<()> {
        print_help(self.prompter.out())?;
        Ok(())
    }

    fn add_client(&mut self) -> Result<()> {
        let client = NewClient {
            first_name: self.prompter.get_token("Enter client first name")?,
            last_name: self.prompter.get_token("Enter client last name")?,
            address: self.prompter.get_token("Enter client address")?,
            phone: self.prompter.get_token("Enter client phone")?,
        };
        let result = self.api.add_client(client)?;
        self.show_messages(&result)
    }

    fn add_product(&mut self) -> Result<()> {
        let product = NewProduct {
            name: self.prompter.get_token("Enter product name")?,
            price: self.prompter.get_amount("Enter product price")?,
            quantity: self.prompter.get_number("Enter product quantity")?,
        };
        let result = self.api.add_product(product)?;
        self.show_messages(&result)
    }

    fn view_clients(&mut self) -> Result<()> {
        let result = self.api.list_clients()?;
        self.show(&result)
    }

    fn view_products(&mut self) -> Result<()> {
        let result = self.api.list_products()?;
        self.show(&result)
    }

    fn add_to_wishlist(&mut self) -> Result<()> {
        let client_id = self.prompter.get_token("Enter client ID")?;
        let product_id = self.prompter.get_token("Enter product ID")?;
        let quantity = self.prompter.get_number("Enter quantity")?;
        let result = self.api.add_to_wishlist(&client_id, &product_id, quantity)?;
        self.show_messages(&result)
    }

    fn place_order(&mut self) -> Result<()> {
        let client_id = self.prompter.get_token("Enter client ID")?;
        let result = self.api.place_order(&client_id)?;
        self.show(&result)
    }

    fn receive_payment(&mut self) -> Result<()> {
        let client_id = self.prompter.get_token("Enter client ID")?;
        let amount = self.prompter.get_amount("Enter payment amount")?;
        let result = self.api.receive_payment(&client_id, amount)?;
        self.show_messages(&result)
    }

    fn receive_shipment(&mut self) -> Result<()> {
        let product_id = self.prompter.get_token("Enter product ID")?;
        let quantity = self.prompter.get_number("Enter shipment quantity")?;
        let result = self.api.receive_shipment(&product_id, quantity)?;
        self.show_messages(&result)
    }

    fn view_invoices(&mut self) -> Result<()> {
        let client_id = self.prompter.get_token("Enter client ID")?;
        let result = self.api.view_invoices(&client_id)?;
        self.show(&result)
    }

    fn save(&mut self) -> Result<()> {
        let result = self.api.save()?;
        self.show_messages(&result)
    }

    fn retrieve(&mut self) -> Result<()> {
        let result = self.api.retrieve()?;
        self.show_messages(&result)
    }

    #[cfg(test)]
    fn api(&self) -> &WarehouseApi<S> {
        &self.api
    }

    #[cfg(test)]
    fn printed(&self) -> String
    where
        W: AsRef<[u8]>,
    {
        String::from_utf8_lossy(self.prompter.output().as_ref()).into_owned()
    }
}
