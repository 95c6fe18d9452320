//! zone_exposure library: hosted-zone exposure auditing
//!
//! This library inventories the public-facing DNS names in a set of hosted
//! zones and reports, for each name, the public IPv4 addresses it
//! ultimately resolves to. Address records are read directly; alias and
//! CNAME records are chased through bounded chain resolution; every
//! resulting address is classified against the private-use ranges and only
//! public ones are surfaced.
//!
//! # Example
//!
//! ```no_run
//! use zone_exposure::{run_audit, Config};
//! use clap::Parser;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::parse_from(["zone_exposure", "zones.json"]);
//! let report = run_audit(config).await?;
//! println!(
//!     "Audited {} zones, emitted {} pairs",
//!     report.zones, report.rows
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod classify;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod pipeline;
pub mod records;
pub mod zones;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, MalformedIpPolicy};
pub use run::{run_audit, AuditReport};

// Internal run module (contains the top-level audit logic)
mod run {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use log::info;

    use crate::config::Config;
    use crate::dns::HickoryLookup;
    use crate::error_handling::{print_run_statistics, RunStats, WarningType};
    use crate::export::write_inventory;
    use crate::initialization::init_resolver;
    use crate::pipeline::run_pipeline;
    use crate::zones::FileZoneStore;

    /// Results of an audit run.
    ///
    /// Contains summary statistics about the completed audit.
    #[derive(Debug, Clone)]
    pub struct AuditReport {
        /// Public zones visited
        pub zones: usize,
        /// Qualifying records processed
        pub records: usize,
        /// Records skipped because resolution failed
        pub failed_records: usize,
        /// (name, public address) pairs emitted
        pub rows: usize,
        /// Where the listing was written, if not stdout
        pub output: Option<PathBuf>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs an exposure audit with the provided configuration.
    ///
    /// This is the main entry point for the library. It loads the zone
    /// snapshot, resolves and classifies every qualifying record, writes
    /// the `name,public_ip` listing, and prints end-of-run statistics for
    /// any partial failures.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The zone snapshot cannot be read or parsed
    /// - The DNS resolver cannot be initialized
    /// - The output sink cannot be written
    ///
    /// Record-level failures do not abort the run; they degrade the output
    /// and are counted in `failed_records`.
    pub async fn run_audit(config: Config) -> Result<AuditReport> {
        let store = FileZoneStore::load(&config.zone_file)
            .context("Failed to load zone snapshot")?;

        let resolver = init_resolver().context("Failed to initialize DNS resolver")?;
        let lookup = HickoryLookup::new(resolver);

        let stats = RunStats::new();
        for _ in 0..store.malformed_record_count() {
            stats.increment_warning(WarningType::MalformedRecord);
        }

        let start_time = std::time::Instant::now();

        let outcome = run_pipeline(
            &store,
            &lookup,
            &stats,
            config.malformed_ips,
            config.max_concurrency,
        )
        .await?;

        let rows_written = write_inventory(&outcome.rows, config.output.as_ref())
            .context("Failed to write inventory")?;
        if let Some(path) = &config.output {
            info!("Inventory written to {}", path.display());
        }

        print_run_statistics(&stats);

        Ok(AuditReport {
            zones: outcome.zones,
            records: outcome.records,
            failed_records: outcome.failed_records,
            rows: rows_written,
            output: config.output.clone(),
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
