//! Inventory service
//!
//! Business logic for the product catalogue: adding and updating products,
//! recording sales against stock, low-stock scans and the summary report.
//! Every operation either applies completely or leaves storage untouched.

use tracing::{debug, info, warn};

use crate::error::{InventoryError, InventoryResult};
use crate::models::product::validate_name;
use crate::models::{Money, Product, ProductId, SaleRecord};
use crate::storage::Storage;

/// Service for inventory management
pub struct InventoryService<'a> {
    storage: &'a mut Storage,
}

/// Fields to change on an existing product
///
/// `None` leaves the current value in place. `Some(0)` for the quantity is an
/// explicit zero, not "keep current".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<Money>,
    pub quantity: Option<u32>,
}

impl ProductUpdate {
    /// Whether the update changes nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.quantity.is_none()
    }
}

/// Snapshot of the inventory for reporting
#[derive(Debug, Clone)]
pub struct InventoryReport {
    /// All products in ID order
    pub products: Vec<Product>,
    /// Revenue from all sales so far
    pub total_revenue: Money,
    /// Number of sales recorded
    pub sales_count: usize,
    /// Units on hand across all products
    pub total_units: u64,
}

impl InventoryReport {
    /// Whether there is nothing to list
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> InventoryService<'a> {
    /// Create a new inventory service over the given storage
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Add a new product
    pub fn add_product(
        &mut self,
        id: ProductId,
        name: &str,
        price: Money,
        quantity: u32,
    ) -> InventoryResult<Product> {
        if self.storage.products.contains(id) {
            warn!(product_id = %id, "rejected add: product id already exists");
            return Err(InventoryError::DuplicateId(id));
        }

        if price.is_negative() {
            return Err(InventoryError::NegativeValue { field: "Price" });
        }

        let product = Product::new(id, name, price, quantity);
        product
            .validate()
            .map_err(|e| InventoryError::Validation(e.to_string()))?;

        self.storage
            .products
            .insert(product.clone())
            .map_err(|p| InventoryError::DuplicateId(p.id))?;

        info!(
            product_id = %id,
            name = %product.name,
            price = %product.price,
            quantity,
            "product added"
        );

        Ok(product)
    }

    /// Update an existing product, changing only the fields that are set
    pub fn update_product(
        &mut self,
        id: ProductId,
        update: ProductUpdate,
    ) -> InventoryResult<Product> {
        let product = self.storage.products.get_mut(id).ok_or_else(|| {
            warn!(product_id = %id, "rejected update: unknown product id");
            InventoryError::UnknownId(id)
        })?;

        if let Some(name) = &update.name {
            validate_name(name).map_err(|e| InventoryError::Validation(e.to_string()))?;
        }
        if update.price.is_some_and(|p| p.is_negative()) {
            return Err(InventoryError::NegativeValue { field: "Price" });
        }

        if update.is_empty() {
            debug!(product_id = %id, "update with no changes");
            return Ok(product.clone());
        }

        if let Some(name) = update.name {
            product.name = name;
        }
        if let Some(price) = update.price {
            product.price = price;
        }
        if let Some(quantity) = update.quantity {
            product.quantity = quantity;
        }
        product.touch();

        info!(
            product_id = %id,
            name = %product.name,
            price = %product.price,
            quantity = product.quantity,
            "product updated"
        );

        Ok(product.clone())
    }

    /// Record a sale, taking units out of stock and adding to revenue
    pub fn record_sale(&mut self, id: ProductId, quantity_sold: u32) -> InventoryResult<SaleRecord> {
        let product = self
            .storage
            .products
            .get(id)
            .ok_or(InventoryError::UnknownId(id))?;

        if quantity_sold == 0 {
            return Err(InventoryError::InvalidQuantity(quantity_sold));
        }

        if product.quantity < quantity_sold {
            warn!(
                product_id = %id,
                requested = quantity_sold,
                available = product.quantity,
                "rejected sale: insufficient stock"
            );
            return Err(InventoryError::InsufficientStock {
                product: id,
                requested: quantity_sold,
                available: product.quantity,
            });
        }

        let sale = SaleRecord::for_product(product, quantity_sold)
            .ok_or_else(|| InventoryError::Validation("Sale amount is too large".into()))?;
        let new_total = self
            .storage
            .sales
            .revenue_after(&sale)
            .ok_or_else(|| InventoryError::Validation("Total revenue is too large".into()))?;

        let remaining = self
            .storage
            .products
            .get_mut(id)
            .and_then(|p| p.remove_stock(quantity_sold))
            .ok_or(InventoryError::InsufficientStock {
                product: id,
                requested: quantity_sold,
                available: 0,
            })?;

        self.storage.sales.append(sale.clone(), new_total);

        info!(
            product_id = %id,
            quantity = quantity_sold,
            amount = %sale.amount,
            remaining,
            total_revenue = %new_total,
            "sale recorded"
        );

        Ok(sale)
    }

    /// Products whose stock is strictly below `threshold`, in ID order
    ///
    /// An empty vector means nothing is running low.
    pub fn track_inventory(&self, threshold: u32) -> Vec<Product> {
        let low: Vec<Product> = self
            .storage
            .products
            .iter()
            .filter(|p| p.is_low_stock(threshold))
            .cloned()
            .collect();

        debug!(threshold, matches = low.len(), "low stock scan");
        low
    }

    /// Build a report of the current inventory and total revenue
    pub fn generate_report(&self) -> InventoryReport {
        InventoryReport {
            products: self.storage.products.get_all(),
            total_revenue: self.storage.sales.total_revenue(),
            sales_count: self.storage.sales.len(),
            total_units: self
                .storage
                .products
                .iter()
                .map(|p| u64::from(p.quantity))
                .sum(),
        }
    }

    /// Get a product by ID
    pub fn get(&self, id: ProductId) -> Option<Product> {
        self.storage.products.get(id).cloned()
    }

    /// Check whether a product ID is taken
    pub fn contains(&self, id: ProductId) -> bool {
        self.storage.products.contains(id)
    }

    /// Revenue from all sales so far
    pub fn total_revenue(&self) -> Money {
        self.storage.sales.total_revenue()
    }

    /// All recorded sales, oldest first
    pub fn sales(&self) -> &[SaleRecord] {
        self.storage.sales.entries()
    }
}
