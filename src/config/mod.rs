//! Configuration module for the inventory tracker
//!
//! Holds user preferences for report rendering and low-stock scans.

pub mod settings;

pub use settings::{ReportStyle, Settings};
