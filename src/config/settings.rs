//! User settings for the inventory tracker
//!
//! Manages display preferences and the default low-stock threshold. Settings
//! are only read from disk when the operator points at a file; otherwise the
//! defaults apply and nothing touches the filesystem.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::InventoryError;
use crate::models::DEFAULT_CURRENCY;

/// How reports are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportStyle {
    /// One "Product: ..., Price: ..., Quantity: ..." line per product
    #[default]
    Plain,
    /// Bordered table with a stock value column
    Table,
}

impl fmt::Display for ReportStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Table => write!(f, "table"),
        }
    }
}

/// User settings for the inventory tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Symbol printed in front of prices and revenue
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Report layout
    #[serde(default)]
    pub report_style: ReportStyle,

    /// Threshold used by the low-stock scan instead of prompting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_stock_threshold: Option<u32>,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            report_style: ReportStyle::default(),
            low_stock_threshold: None,
        }
    }
}

impl Settings {
    /// Load settings from a file, or the defaults when no file is given
    pub fn load(path: Option<&Path>) -> Result<Self, InventoryError> {
        let Some(path) = path else {
            return Ok(Settings::default());
        };

        let contents = std::fs::read_to_string(path).map_err(|e| {
            InventoryError::Io(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            InventoryError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a file
    pub fn save(&self, path: &Path) -> Result<(), InventoryError> {
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            InventoryError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(path, contents)
            .map_err(|e| InventoryError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Check that loaded values are usable
    pub fn validate(&self) -> Result<(), InventoryError> {
        if self.currency_symbol.chars().count() > 8 {
            return Err(InventoryError::Config(format!(
                "Currency symbol too long: '{}'",
                self.currency_symbol
            )));
        }
        Ok(())
    }
}
