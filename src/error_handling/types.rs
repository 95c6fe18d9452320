//! Error type definitions.
//!
//! This module defines the error and warning types used throughout the
//! application.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    #[allow(dead_code)] // Reserved for future use if fallback fails
    DnsResolverError(String),
}

/// Types of errors that can occur while processing a record.
///
/// These categorize failures that prevent a record from contributing to the
/// inventory. The affected record is skipped; the run continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// A DNS query failed for a reason other than "no such record"
    DnsLookup,
    /// A CNAME chain looped back on itself or exceeded the hop budget
    ResolutionChain,
    /// Fetching the record listing for a zone failed
    ZoneRecordFetch,
}

/// Types of warnings that can occur while processing a record.
///
/// Warnings indicate defective upstream data that is skipped without
/// affecting the rest of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)] // All variants start with "Malformed" by design
pub enum WarningType {
    /// An address record with neither literal values nor an alias target
    MalformedRecord,
    /// A resolved address string that does not parse as IPv4 (drop policy)
    MalformedAddress,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Returns a human-readable string representation of the error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::DnsLookup => "DNS lookup error",
            ErrorType::ResolutionChain => "Resolution chain error",
            ErrorType::ZoneRecordFetch => "Zone record fetch error",
        }
    }
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::MalformedRecord => "Malformed record",
            WarningType::MalformedAddress => "Malformed address",
        }
    }
}
