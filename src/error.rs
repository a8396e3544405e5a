//! Custom error types for the inventory tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::ProductId;

/// The main error type for inventory operations
#[derive(Error, Debug)]
pub enum InventoryError {
    /// A product with this ID is already stocked
    #[error("Product ID {0} already exists")]
    DuplicateId(ProductId),

    /// No product with this ID is stocked
    #[error("Product ID {0} does not exist")]
    UnknownId(ProductId),

    /// Sale quantity must be greater than zero
    #[error("Invalid sale quantity: {0}")]
    InvalidQuantity(u32),

    /// Not enough units on hand to cover a sale
    #[error("Insufficient stock for product {product}: requested {requested}, available {available}")]
    InsufficientStock {
        product: ProductId,
        requested: u32,
        available: u32,
    },

    /// Text that should have been a number
    #[error("Invalid input for {field}: '{input}' is not a valid number")]
    NonNumericInput { field: &'static str, input: String },

    /// A number that must not be negative
    #[error("{field} cannot be negative")]
    NegativeValue { field: &'static str },

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File or terminal I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// The input stream closed while a value was expected
    #[error("End of input")]
    EndOfInput,
}

impl InventoryError {
    /// Check if this is an unknown-product error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UnknownId(_))
    }

    /// Check if this error came from rejecting user-supplied data
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::InvalidQuantity(_)
                | Self::NonNumericInput { .. }
                | Self::NegativeValue { .. }
        )
    }

    /// Domain errors are reported to the operator and never end the session
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::DuplicateId(_)
                | Self::UnknownId(_)
                | Self::InvalidQuantity(_)
                | Self::InsufficientStock { .. }
                | Self::NonNumericInput { .. }
                | Self::NegativeValue { .. }
                | Self::Validation(_)
        )
    }
}

impl From<std::io::Error> for InventoryError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;
