//! Record lookup trait and test double.
//!
//! [`RecordLookup`] is the seam between the resolver and whatever answers
//! DNS queries. Implementations report "no records of this type" and "name
//! does not exist" as an empty answer; every other failure is a
//! [`LookupError`] tagged with the offending name.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

/// A DNS query failure other than "no such record".
///
/// Timeouts, server failures, and network errors land here. Callers decide
/// whether to skip the affected record or abort.
#[derive(Error, Debug, Clone)]
#[error("DNS query for {name} failed: {message}")]
pub struct LookupError {
    /// The name being queried when the failure occurred.
    pub name: String,
    /// Human-readable failure detail from the underlying client.
    pub message: String,
}

/// Async source of A and CNAME answers for a DNS name.
#[async_trait::async_trait]
pub trait RecordLookup: Send + Sync {
    /// Returns the IPv4 addresses from the name's A records, in response
    /// order. A name with no A records (or no existence at all) yields an
    /// empty list, not an error.
    async fn ipv4_records(&self, name: &str) -> Result<Vec<String>, LookupError>;

    /// Returns the target names from the name's CNAME records, in response
    /// order. Absence yields an empty list, not an error.
    async fn cname_targets(&self, name: &str) -> Result<Vec<String>, LookupError>;
}

/// Normalizes a DNS name for comparison: case-insensitive, trailing root
/// dot ignored.
pub(crate) fn normalize_name(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}

/// Scripted in-memory [`RecordLookup`].
///
/// Answers from fixed tables and can inject failures for chosen names.
/// Substituted for the live resolver in tests and offline runs.
#[derive(Debug, Default)]
pub struct StaticLookup {
    a: HashMap<String, Vec<String>>,
    cname: HashMap<String, Vec<String>>,
    failing: HashSet<String>,
}

impl StaticLookup {
    /// Creates an empty lookup table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds A records for a name.
    pub fn with_a(mut self, name: &str, addresses: &[&str]) -> Self {
        self.a
            .entry(normalize_name(name))
            .or_default()
            .extend(addresses.iter().map(|a| a.to_string()));
        self
    }

    /// Adds CNAME targets for a name.
    pub fn with_cname(mut self, name: &str, targets: &[&str]) -> Self {
        self.cname
            .entry(normalize_name(name))
            .or_default()
            .extend(targets.iter().map(|t| t.to_string()));
        self
    }

    /// Makes every query for a name fail, simulating a transient outage.
    pub fn with_failure(mut self, name: &str) -> Self {
        self.failing.insert(normalize_name(name));
        self
    }

    fn check_failure(&self, name: &str) -> Result<(), LookupError> {
        if self.failing.contains(&normalize_name(name)) {
            return Err(LookupError {
                name: name.to_string(),
                message: "simulated server failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl RecordLookup for StaticLookup {
    async fn ipv4_records(&self, name: &str) -> Result<Vec<String>, LookupError> {
        self.check_failure(name)?;
        Ok(self
            .a
            .get(&normalize_name(name))
            .cloned()
            .unwrap_or_default())
    }

    async fn cname_targets(&self, name: &str) -> Result<Vec<String>, LookupError> {
        self.check_failure(name)?;
        Ok(self
            .cname
            .get(&normalize_name(name))
            .cloned()
            .unwrap_or_default())
    }
}
