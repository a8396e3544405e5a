//! Sale record model
//!
//! One entry per successful sale. The price is captured at the time of sale
//! so later price changes do not rewrite history.

use chrono::{DateTime, Utc};

use super::ids::ProductId;
use super::money::Money;
use super::product::Product;

/// A completed sale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleRecord {
    /// Product that was sold
    pub product_id: ProductId,

    /// Product name at the time of sale
    pub product_name: String,

    /// Units sold
    pub quantity: u32,

    /// Unit price at the time of sale
    pub unit_price: Money,

    /// `unit_price * quantity`
    pub amount: Money,

    /// When the sale was recorded
    pub recorded_at: DateTime<Utc>,
}

impl SaleRecord {
    /// Build a record for selling `quantity` units of `product`
    ///
    /// Returns `None` if the amount overflows.
    pub fn for_product(product: &Product, quantity: u32) -> Option<Self> {
        let amount = product.price.checked_mul_quantity(quantity)?;
        Some(Self {
            product_id: product.id,
            product_name: product.name.clone(),
            quantity,
            unit_price: product.price,
            amount,
            recorded_at: Utc::now(),
        })
    }
}
