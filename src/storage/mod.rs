//! Storage layer for the inventory tracker
//!
//! Everything lives in memory for the lifetime of the process. The caller
//! creates one [`Storage`] and hands it to the service layer.

pub mod products;
pub mod sales;

pub use products::ProductRepository;
pub use sales::SalesLedger;

/// Main storage coordinator that owns all repositories
#[derive(Debug, Default)]
pub struct Storage {
    pub products: ProductRepository,
    pub sales: SalesLedger,
}

impl Storage {
    /// Create empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if anything has been stocked yet
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
