//! Service layer for the inventory tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and keeping stock and revenue consistent.

pub mod inventory;

pub use inventory::{InventoryReport, InventoryService, ProductUpdate};
