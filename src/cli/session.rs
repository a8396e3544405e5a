//! Interactive menu session
//!
//! Runs the numbered menu until the operator exits or input ends. Domain
//! errors are printed as status lines and the menu comes back; only terminal
//! I/O failures end the session with an error.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::config::Settings;
use crate::display::{
    format_inventory_report, format_low_stock, format_product_details, format_sale,
};
use crate::error::{InventoryError, InventoryResult};
use crate::models::product::validate_name;
use crate::models::ProductId;
use crate::services::{InventoryService, ProductUpdate};
use crate::storage::Storage;

use super::menu::{MenuChoice, CHOICE_PROMPT, MENU};
use super::prompt::Prompter;

/// What to do after handling a menu choice
enum Flow {
    Continue,
    Exit,
}

/// An interactive session over one inventory
pub struct Session<'a, R, W> {
    storage: &'a mut Storage,
    settings: &'a Settings,
    prompter: Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Create a new session reading from `input` and writing to `output`
    pub fn new(storage: &'a mut Storage, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            storage,
            settings,
            prompter: Prompter::new(input, output),
        }
    }

    /// Run the menu loop until exit or end of input
    pub fn run(&mut self) -> InventoryResult<()> {
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) | Err(InventoryError::EndOfInput) => {
                    self.prompter.say("Exiting...")?;
                    return Ok(());
                }
                Err(e) if e.is_recoverable() => {
                    self.prompter.say(&status_message(&e))?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Give back the output writer
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    fn step(&mut self) -> InventoryResult<Flow> {
        self.prompter.write(MENU)?;
        let answer = self.prompter.prompt_string(CHOICE_PROMPT)?;

        let Some(choice) = MenuChoice::parse(&answer) else {
            self.prompter
                .say("Invalid choice. Please enter a number from 1 to 6.")?;
            return Ok(Flow::Continue);
        };
        debug!(%choice, "menu selection");

        match choice {
            MenuChoice::AddProduct => self.add_product()?,
            MenuChoice::UpdateProduct => {
                let id = self.prompt_id("Enter Product ID to Update: ")?;
                self.update_product(id)?;
            }
            MenuChoice::RecordSale => self.record_sale()?,
            MenuChoice::TrackLowStock => self.track_low_stock()?,
            MenuChoice::GenerateReport => self.generate_report()?,
            MenuChoice::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    fn prompt_id(&mut self, prompt: &str) -> InventoryResult<ProductId> {
        self.prompter
            .prompt_whole(prompt, "Product ID")
            .map(ProductId::new)
    }

    fn add_product(&mut self) -> InventoryResult<()> {
        let id = self.prompt_id("Enter Product ID: ")?;

        if InventoryService::new(self.storage).contains(id) {
            self.prompter.say("Product ID already exists.")?;
            if self
                .prompter
                .confirm("Do you want to update this product? (yes/no): ")?
            {
                self.update_product(id)?;
            }
            return Ok(());
        }

        let name = self
            .prompter
            .prompt_checked("Enter Product Name: ", false, validate_name)?
            .unwrap_or_default();
        let price = self
            .prompter
            .prompt_money("Enter Product Price: ", "Product Price")?;
        let quantity = self
            .prompter
            .prompt_whole("Enter Product Quantity: ", "Product Quantity")?;

        InventoryService::new(self.storage).add_product(id, &name, price, quantity)?;
        self.prompter.say("Product added successfully.")
    }

    fn update_product(&mut self, id: ProductId) -> InventoryResult<()> {
        let Some(current) = InventoryService::new(self.storage).get(id) else {
            return Err(InventoryError::UnknownId(id));
        };
        self.prompter.say(&format!(
            "Current: {}",
            format_product_details(&current, &self.settings.currency_symbol)
        ))?;

        let name = self.prompter.prompt_checked(
            "Enter New Product Name (Leave blank to keep current): ",
            true,
            validate_name,
        )?;
        let price = self.prompter.prompt_optional_money(
            "Enter New Product Price (Leave blank to keep current): ",
            "Product Price",
        )?;
        let quantity = self.prompter.prompt_optional_whole(
            "Enter New Product Quantity (Leave blank to keep current): ",
            "Product Quantity",
        )?;

        let update = ProductUpdate {
            name,
            price,
            quantity,
        };

        InventoryService::new(self.storage).update_product(id, update)?;
        self.prompter.say("Product updated successfully.")
    }

    fn record_sale(&mut self) -> InventoryResult<()> {
        let id = self.prompt_id("Enter Product ID to Record Sale: ")?;
        let quantity = self
            .prompter
            .prompt_positive("Enter Quantity Sold: ", "Quantity sold")?;

        let sale = InventoryService::new(self.storage).record_sale(id, quantity)?;
        self.prompter.say("Sale recorded successfully.")?;
        self.prompter
            .say(&format_sale(&sale, &self.settings.currency_symbol))
    }

    fn track_low_stock(&mut self) -> InventoryResult<()> {
        let threshold = match self.settings.low_stock_threshold {
            Some(threshold) => {
                self.prompter
                    .say(&format!("Using configured threshold: {}", threshold))?;
                threshold
            }
            None => self
                .prompter
                .prompt_whole("Enter Threshold Quantity: ", "Threshold quantity")?,
        };

        let low = InventoryService::new(self.storage).track_inventory(threshold);
        self.prompter.write(&format_low_stock(&low))
    }

    fn generate_report(&mut self) -> InventoryResult<()> {
        let report = InventoryService::new(self.storage).generate_report();
        self.prompter
            .write(&format_inventory_report(&report, self.settings))
    }
}

/// One-line status for an error the operator can recover from
fn status_message(err: &InventoryError) -> String {
    match err {
        InventoryError::DuplicateId(_) => "Product ID already exists.".to_string(),
        InventoryError::UnknownId(_) => "Product ID does not exist.".to_string(),
        InventoryError::InvalidQuantity(_) => "Invalid sale quantity.".to_string(),
        InventoryError::InsufficientStock { available, .. } => {
            format!("Insufficient stock. Only {} available.", available)
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportStyle;
    use crate::models::Money;
    use std::io::Cursor;

    fn run_session(storage: &mut Storage, settings: &Settings, input: &str) -> String {
        let mut session = Session::new(
            storage,
            settings,
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
        );
        session.run().unwrap();
        String::from_utf8(session.into_output()).unwrap()
    }

    #[test]
    fn test_add_sell_track_report() {
        let mut storage = Storage::new();
        let settings = Settings::default();
        let out = run_session(
            &mut storage,
            &settings,
            "1\n1\nPen\n2.5\n10\n3\n1\n3\n4\n8\n5\n6\n",
        );

        assert!(out.contains("Product added successfully."));
        assert!(out.contains("Sale recorded successfully."));
        assert!(out.contains("Low stock products:\nPen: 7\n"));
        assert!(out.contains("Product: Pen, Price: Rs.2.50, Quantity: 7"));
        assert!(out.contains("Total Revenue from Sales: Rs.7.50"));
        assert!(out.ends_with("Exiting...\n"));

        assert_eq!(storage.sales.total_revenue(), Money::from_cents(750));
    }

    #[test]
    fn test_duplicate_declined_keeps_original() {
        let mut storage = Storage::new();
        let settings = Settings::default();
        let out = run_session(
            &mut storage,
            &settings,
            "1\n1\nPen\n2.5\n10\n1\n1\nno\n6\n",
        );

        assert!(out.contains("Product ID already exists."));
        let product = storage.products.get(ProductId::new(1)).unwrap();
        assert_eq!(product.name, "Pen");
        assert_eq!(product.quantity, 10);
    }

    #[test]
    fn test_duplicate_accepted_runs_update() {
        let mut storage = Storage::new();
        let settings = Settings::default();
        let out = run_session(
            &mut storage,
            &settings,
            "1\n1\nPen\n2.5\n10\n1\n1\nyes\nBlue Pen\n\n0\n6\n",
        );

        assert!(out.contains("Product updated successfully."));
        let product = storage.products.get(ProductId::new(1)).unwrap();
        assert_eq!(product.name, "Blue Pen");
        assert_eq!(product.price, Money::from_cents(250));
        assert_eq!(product.quantity, 0);
    }

    #[test]
    fn test_update_unknown_id() {
        let mut storage = Storage::new();
        let settings = Settings::default();
        let out = run_session(&mut storage, &settings, "2\n4\n6\n");

        assert!(out.contains("Product ID does not exist."));
        assert!(storage.is_empty());
    }

    #[test]
    fn test_sale_errors_return_to_menu() {
        let mut storage = Storage::new();
        let settings = Settings::default();
        let out = run_session(
            &mut storage,
            &settings,
            "3\n9\n1\n1\n1\nPen\n2.5\n10\n3\n1\n11\n6\n",
        );

        assert!(out.contains("Product ID does not exist."));
        assert!(out.contains("Insufficient stock. Only 10 available."));
        assert_eq!(storage.products.get(ProductId::new(1)).unwrap().quantity, 10);
        assert!(storage.sales.total_revenue().is_zero());
    }

    #[test]
    fn test_invalid_choice_and_empty_report() {
        let mut storage = Storage::new();
        let settings = Settings::default();
        let out = run_session(&mut storage, &settings, "9\n5\n4\n0\n6\n");

        assert!(out.contains("Invalid choice. Please enter a number from 1 to 6."));
        assert!(out.contains("No products in inventory."));
        assert!(out.contains("No low stock products."));
    }

    #[test]
    fn test_end_of_input_exits() {
        let mut storage = Storage::new();
        let settings = Settings::default();
        let out = run_session(&mut storage, &settings, "1\n1\nPen\n");

        assert!(out.ends_with("Exiting...\n"));
        assert!(storage.is_empty());
    }

    #[test]
    fn test_configured_threshold_and_table_report() {
        let mut storage = Storage::new();
        let settings = Settings {
            report_style: ReportStyle::Table,
            low_stock_threshold: Some(5),
            ..Settings::default()
        };
        let out = run_session(
            &mut storage,
            &settings,
            "1\n1\nPen\n2.5\n3\n4\n5\n6\n",
        );

        assert!(out.contains("Using configured threshold: 5"));
        assert!(out.contains("Pen: 3"));
        assert!(out.contains("1 products, 3 units in stock, 0 sales recorded"));
    }

    #[test]
    fn test_sub_cent_price_is_reprompted() {
        let mut storage = Storage::new();
        let settings = Settings::default();
        let out = run_session(&mut storage, &settings, "1\n1\nBolt\n0.125\n0.13\n8\n6\n");

        assert!(out.contains("Invalid input. Please enter a valid number for Product Price."));
        assert!(out.contains("Product added successfully."));
        let product = storage.products.get(ProductId::new(1)).unwrap();
        assert_eq!(product.price, Money::from_cents(13));
    }

    #[test]
    fn test_overlong_name_is_reprompted() {
        let mut storage = Storage::new();
        let settings = Settings::default();
        let input = format!("1\n1\n{}\nPen\n2.5\n10\n6\n", "x".repeat(101));
        let out = run_session(&mut storage, &settings, &input);

        assert!(out.contains("Product name too long (101 chars, max 100)."));
        assert_eq!(out.matches("Enter Product Name: ").count(), 2);
        assert!(out.contains("Product added successfully."));
        assert_eq!(storage.products.get(ProductId::new(1)).unwrap().name, "Pen");
    }

    #[test]
    fn test_update_blank_fields_keep_current() {
        let mut storage = Storage::new();
        let settings = Settings::default();
        let out = run_session(
            &mut storage,
            &settings,
            "1\n1\nPen\n2.5\n10\n2\n1\n\n\n\n6\n",
        );

        assert!(out.contains("Current: Product 1: Pen, Price: Rs.2.50, Quantity: 10\n  Added: "));
        assert!(out.contains("Product updated successfully."));
        let product = storage.products.get(ProductId::new(1)).unwrap();
        assert_eq!(product.name, "Pen");
        assert_eq!(product.price, Money::from_cents(250));
        assert_eq!(product.quantity, 10);
    }

    #[test]
    fn test_sale_prints_receipt_line() {
        let mut storage = Storage::new();
        let settings = Settings::default();
        let out = run_session(&mut storage, &settings, "1\n1\nPen\n2.5\n10\n3\n1\n3\n6\n");

        assert!(out.contains("Sale recorded successfully.\n["));
        assert!(out.contains(" UTC] 3 x Pen @ Rs.2.50 = Rs.7.50\n"));
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(
            status_message(&InventoryError::InvalidQuantity(0)),
            "Invalid sale quantity."
        );
        assert_eq!(
            status_message(&InventoryError::Validation("bad".into())),
            "Validation error: bad"
        );
    }
}
