//! inventory-cli - Terminal-based in-memory inventory tracker
//!
//! This library provides the core functionality for the inventory tracker:
//! adding and updating products, recording sales against stock, flagging
//! low-stock items and printing a summary report. Everything lives in memory
//! for the lifetime of the process.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: User settings
//! - `error`: Custom error types
//! - `models`: Core data models (products, money, sales)
//! - `storage`: In-memory product catalogue and sales ledger
//! - `services`: Business logic layer
//! - `display`: Report formatting
//! - `cli`: Interactive menu session
//!
//! # Example
//!
//! ```
//! use inventory_cli::models::{Money, ProductId};
//! use inventory_cli::services::InventoryService;
//! use inventory_cli::storage::Storage;
//!
//! let mut storage = Storage::new();
//! let mut service = InventoryService::new(&mut storage);
//!
//! service.add_product(ProductId::new(1), "Pen", Money::from_cents(250), 10)?;
//! service.record_sale(ProductId::new(1), 3)?;
//!
//! assert_eq!(service.get(ProductId::new(1)).unwrap().quantity, 7);
//! assert_eq!(service.total_revenue(), Money::from_cents(750));
//! # Ok::<(), inventory_cli::InventoryError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{InventoryError, InventoryResult};
