//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `zone_exposure` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing summary output
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::process;

use zone_exposure::initialization::init_logger_with;
use zone_exposure::{run_audit, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Run the audit using the library
    match run_audit(config).await {
        Ok(report) => {
            // The CSV stream may own stdout, so the summary goes to the log
            info!(
                "✅ Audited {} zone{} ({} record{}, {} failed) in {:.1}s: {} public address pair{} emitted",
                report.zones,
                if report.zones == 1 { "" } else { "s" },
                report.records,
                if report.records == 1 { "" } else { "s" },
                report.failed_records,
                report.elapsed_seconds,
                report.rows,
                if report.rows == 1 { "" } else { "s" }
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("zone_exposure error: {:#}", e);
            process::exit(1);
        }
    }
}
