use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use inventory_cli::cli::run_interactive;
use inventory_cli::config::{ReportStyle, Settings};
use inventory_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "inventory",
    version,
    about = "Terminal-based in-memory inventory tracker",
    long_about = "Add, update and sell products from a numbered menu, flag \
                  low-stock items and print a summary report. Nothing is \
                  saved between runs."
)]
struct Cli {
    /// Path to a JSON settings file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Render reports as a table
    #[arg(long, global = true)]
    table: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu (default)
    Run,

    /// Show the effective settings
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut settings = Settings::load(cli.config.as_deref())?;
    if cli.table {
        settings.report_style = ReportStyle::Table;
    }

    match cli.command {
        Some(Commands::Config) => {
            println!("Inventory Configuration");
            println!("=======================");
            match &cli.config {
                Some(path) => println!("Settings file:       {}", path.display()),
                None => println!("Settings file:       (defaults)"),
            }
            println!("Currency symbol:     {}", settings.currency_symbol);
            println!("Report style:        {}", settings.report_style);
            match settings.low_stock_threshold {
                Some(threshold) => println!("Low stock threshold: {}", threshold),
                None => println!("Low stock threshold: (ask each time)"),
            }
        }
        Some(Commands::Run) | None => {
            let mut storage = Storage::new();
            info!(report_style = %settings.report_style, "starting interactive session");
            run_interactive(&mut storage, &settings)?;
            info!(
                products = storage.products.len(),
                sales = storage.sales.len(),
                "session ended"
            );
        }
    }

    Ok(())
}

/// Send logs to stderr so they never interleave with the menu on stdout
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
