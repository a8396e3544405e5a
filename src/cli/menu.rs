//! Main menu
//!
//! The numbered choices offered by the interactive session.

use std::fmt;

/// Menu banner and options, printed before every choice
pub const MENU: &str = "\n=== Inventory Management System ===\n\
1. Add Product\n\
2. Update Product\n\
3. Record Sale\n\
4. Track Low Stock Products\n\
5. Generate Report\n\
6. Exit\n";

/// Prompt shown after the menu
pub const CHOICE_PROMPT: &str = "Enter your choice (1-6): ";

/// A selectable menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddProduct,
    UpdateProduct,
    RecordSale,
    TrackLowStock,
    GenerateReport,
    Exit,
}

impl MenuChoice {
    /// Parse an operator's answer; anything but 1-6 is `None`
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddProduct),
            "2" => Some(Self::UpdateProduct),
            "3" => Some(Self::RecordSale),
            "4" => Some(Self::TrackLowStock),
            "5" => Some(Self::GenerateReport),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::AddProduct => "Add Product",
            Self::UpdateProduct => "Update Product",
            Self::RecordSale => "Record Sale",
            Self::TrackLowStock => "Track Low Stock Products",
            Self::GenerateReport => "Generate Report",
            Self::Exit => "Exit",
        };
        write!(f, "{}", label)
    }
}
