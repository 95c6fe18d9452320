//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_MAX_CONCURRENCY;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Policy for address strings that do not parse as IPv4.
///
/// The legacy behavior treated anything not matching a private prefix as
/// public, malformed strings included. `Public` preserves that; `Drop`
/// excludes malformed addresses from the output with a warning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MalformedIpPolicy {
    /// Emit malformed addresses as if they were public (legacy behavior)
    Public,
    /// Skip malformed addresses with a warning
    Drop,
}

/// Audit configuration, parsed from the command line.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "zone_exposure",
    about = "Inventories public-facing DNS names and the public IPv4 addresses they resolve to"
)]
pub struct Config {
    /// Zone snapshot file to audit (JSON export of hosted zones and records)
    pub zone_file: PathBuf,

    /// Write the name,public_ip listing to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum records resolved concurrently
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// How to treat resolved address strings that are not valid IPv4
    #[arg(long, value_enum, default_value = "public")]
    pub malformed_ips: MalformedIpPolicy,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}
