//! DNS resolution.
//!
//! This module provides async DNS operations for the audit:
//! - The [`RecordLookup`] seam over A/CNAME queries, with a live
//!   `hickory-resolver` implementation and a scripted in-memory double
//! - [`resolve_name`], the bounded CNAME-chain resolver
//!
//! All operations are async; "no such record" is an empty answer, every
//! other failure is typed and tagged with the offending name.

mod chain;
mod client;
mod lookup;

// Re-export public API
pub use chain::{resolve_name, ResolveError};
pub use client::HickoryLookup;
pub use lookup::{LookupError, RecordLookup, StaticLookup};

#[cfg(test)]
mod tests;
