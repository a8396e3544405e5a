//! Core data models for the inventory tracker
//!
//! This module contains the data structures that represent the inventory
//! domain: products, their identifiers, prices and recorded sales.

pub mod ids;
pub mod money;
pub mod product;
pub mod sale;

pub use ids::{parse_non_negative, ProductId};
pub use money::{Money, MoneyParseError, DEFAULT_CURRENCY};
pub use product::{Product, ProductValidationError};
pub use sale::SaleRecord;
