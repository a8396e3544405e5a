//! Interactive command-line front end
//!
//! This module contains the numbered-menu session, bridging raw terminal
//! input with the service layer.

pub mod menu;
pub mod prompt;
pub mod session;

pub use menu::MenuChoice;
pub use prompt::Prompter;
pub use session::Session;

use std::io;

use crate::config::Settings;
use crate::error::InventoryResult;
use crate::storage::Storage;

/// Run the menu session on the process's stdin and stdout
pub fn run_interactive(storage: &mut Storage, settings: &Settings) -> InventoryResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(storage, settings, stdin.lock(), stdout.lock()).run()
}
