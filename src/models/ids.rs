//! Product identifier
//!
//! Products are keyed by an operator-chosen non-negative integer. The newtype
//! keeps IDs from being mixed up with quantities, which share the same
//! representation.

use std::fmt;
use std::str::FromStr;

use crate::error::{InventoryError, InventoryResult};

/// Unique key of a product in the inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductId(u32);

impl ProductId {
    /// Create an ID from its numeric value
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the numeric value
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl FromStr for ProductId {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_non_negative("Product ID", s).map(Self)
    }
}

/// Parse a whole number that may not be negative
///
/// Negative input is reported separately from garbage so the operator gets
/// the right re-prompt message.
pub fn parse_non_negative(field: &'static str, input: &str) -> InventoryResult<u32> {
    let trimmed = input.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| InventoryError::NonNumericInput {
            field,
            input: trimmed.to_string(),
        })?;

    if value < 0 {
        return Err(InventoryError::NegativeValue { field });
    }

    u32::try_from(value)
        .map_err(|_| InventoryError::Validation(format!("{} is too large: {}", field, value)))
}
