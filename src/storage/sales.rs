//! Sales ledger
//!
//! Append-only list of completed sales together with the running revenue
//! total. Revenue only ever grows.

use crate::models::{Money, SaleRecord};

/// In-memory record of sales and accumulated revenue
#[derive(Debug, Default)]
pub struct SalesLedger {
    entries: Vec<SaleRecord>,
    total_revenue: Money,
}

impl SalesLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Revenue that would result from appending `sale`, or `None` on overflow
    pub fn revenue_after(&self, sale: &SaleRecord) -> Option<Money> {
        self.total_revenue.checked_add(sale.amount)
    }

    /// Append a sale and set the new revenue total
    ///
    /// Callers compute `new_total` with [`SalesLedger::revenue_after`] before
    /// mutating stock, so a failed overflow check leaves everything untouched.
    pub fn append(&mut self, sale: SaleRecord, new_total: Money) {
        debug_assert!(new_total >= self.total_revenue);
        self.entries.push(sale);
        self.total_revenue = new_total;
    }

    /// Total revenue from all sales
    pub fn total_revenue(&self) -> Money {
        self.total_revenue
    }

    /// All sales in the order they were recorded
    pub fn entries(&self) -> &[SaleRecord] {
        &self.entries
    }

    /// Number of sales recorded
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no sales have been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Product, ProductId};

    #[test]
    fn test_append_accumulates_revenue() {
        let product = Product::new(ProductId::new(1), "Pen", Money::from_cents(250), 10);
        let mut ledger = SalesLedger::new();
        assert!(ledger.total_revenue().is_zero());

        for quantity in [3, 2] {
            let sale = SaleRecord::for_product(&product, quantity).unwrap();
            let total = ledger.revenue_after(&sale).unwrap();
            ledger.append(sale, total);
        }

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.total_revenue(), Money::from_cents(1250));
        assert_eq!(ledger.entries()[0].quantity, 3);
    }
}
