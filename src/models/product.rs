//! Product model
//!
//! A stocked product: its key, display name, unit price and units on hand.

use chrono::{DateTime, Utc};
use std::fmt;

use super::ids::ProductId;
use super::money::Money;

/// A product held in the inventory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Unique identifier, fixed at creation
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Unit price
    pub price: Money,

    /// Units currently in stock
    pub quantity: u32,

    /// When the product was added
    pub created_at: DateTime<Utc>,

    /// When the product was last modified
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a new product
    pub fn new(id: ProductId, name: impl Into<String>, price: Money, quantity: u32) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            price,
            quantity,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether stock is strictly below the threshold
    pub fn is_low_stock(&self, threshold: u32) -> bool {
        self.quantity < threshold
    }

    /// Value of the units on hand at the current price
    pub fn stock_value(&self) -> Option<Money> {
        self.price.checked_mul_quantity(self.quantity)
    }

    /// Take units out of stock
    ///
    /// Returns the remaining quantity, or `None` if there are not enough units.
    pub fn remove_stock(&mut self, units: u32) -> Option<u32> {
        let remaining = self.quantity.checked_sub(units)?;
        self.quantity = remaining;
        self.updated_at = Utc::now();
        Some(remaining)
    }

    /// Mark the product as modified
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Validate the product
    pub fn validate(&self) -> Result<(), ProductValidationError> {
        validate_name(&self.name)?;

        if self.price.is_negative() {
            return Err(ProductValidationError::NegativePrice);
        }

        Ok(())
    }
}

/// Longest accepted product name, in characters
pub const MAX_NAME_LEN: usize = 100;

/// Validate a product name on its own, for partial updates
pub fn validate_name(name: &str) -> Result<(), ProductValidationError> {
    if name.trim().is_empty() {
        return Err(ProductValidationError::EmptyName);
    }

    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(ProductValidationError::NameTooLong(len));
    }

    Ok(())
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for products
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductValidationError {
    EmptyName,
    NameTooLong(usize),
    NegativePrice,
}

impl fmt::Display for ProductValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Product name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(
                    f,
                    "Product name too long ({} chars, max {})",
                    len, MAX_NAME_LEN
                )
            }
            Self::NegativePrice => write!(f, "Price cannot be negative"),
        }
    }
}

impl std::error::Error for ProductValidationError {}
