//! Display formatting for terminal output
//!
//! Provides utilities for formatting inventory data for terminal display.

pub mod product;
pub mod report;

pub use product::{
    format_inventory_report, format_low_stock, format_product_details, format_sale,
};
