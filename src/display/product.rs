//! Product display formatting
//!
//! Formats the inventory report, low-stock listings and single products for
//! terminal output.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::{ReportStyle, Settings};
use crate::models::{Product, SaleRecord};
use crate::services::InventoryReport;

use super::report::{separator, truncate};

const NAME_WIDTH: usize = 30;

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Quantity")]
    quantity: u32,
    #[tabled(rename = "Value")]
    value: String,
}

/// Format the inventory report in the configured style
pub fn format_inventory_report(report: &InventoryReport, settings: &Settings) -> String {
    if report.is_empty() {
        return "No products in inventory.\n".to_string();
    }

    let symbol = settings.currency_symbol.as_str();
    let mut output = String::new();

    match settings.report_style {
        ReportStyle::Plain => {
            output.push_str("Current Inventory:\n");
            for product in &report.products {
                output.push_str(&format!(
                    "Product: {}, Price: {}, Quantity: {}\n",
                    product.name,
                    product.price.format_with_symbol(symbol),
                    product.quantity
                ));
            }
        }
        ReportStyle::Table => {
            let rows: Vec<ProductRow> = report
                .products
                .iter()
                .map(|p| ProductRow {
                    id: p.id.value(),
                    name: truncate(&p.name, NAME_WIDTH),
                    price: p.price.format_with_symbol(symbol),
                    quantity: p.quantity,
                    value: p
                        .stock_value()
                        .map(|v| v.format_with_symbol(symbol))
                        .unwrap_or_else(|| "overflow".to_string()),
                })
                .collect();

            output.push_str("Current Inventory:\n");
            output.push_str(&Table::new(rows).with(Style::rounded()).to_string());
            output.push('\n');
            output.push_str(&format!(
                "{} products, {} units in stock, {} sales recorded\n",
                report.products.len(),
                report.total_units,
                report.sales_count
            ));
            output.push_str(&separator(40));
            output.push('\n');
        }
    }

    output.push_str(&format!(
        "Total Revenue from Sales: {}\n",
        report.total_revenue.format_with_symbol(symbol)
    ));

    output
}

/// Format the result of a low-stock scan
pub fn format_low_stock(products: &[Product]) -> String {
    if products.is_empty() {
        return "No low stock products.\n".to_string();
    }

    let mut output = String::from("Low stock products:\n");
    for product in products {
        output.push_str(&format!("{}: {}\n", product.name, product.quantity));
    }
    output
}

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Format a single product's current values
pub fn format_product_details(product: &Product, symbol: &str) -> String {
    format!(
        "Product {}: {}, Price: {}, Quantity: {}\n  Added: {}, Last updated: {}",
        product.id,
        product.name,
        product.price.format_with_symbol(symbol),
        product.quantity,
        product.created_at.format(TIMESTAMP_FORMAT),
        product.updated_at.format(TIMESTAMP_FORMAT)
    )
}

/// Format a recorded sale as a receipt line
pub fn format_sale(sale: &SaleRecord, symbol: &str) -> String {
    format!(
        "[{}] {} x {} @ {} = {}",
        sale.recorded_at.format(TIMESTAMP_FORMAT),
        sale.quantity,
        sale.product_name,
        sale.unit_price.format_with_symbol(symbol),
        sale.amount.format_with_symbol(symbol)
    )
}
