// Shared test helpers for building zone and record fixtures.
//
// This module provides common builders used across multiple test files to
// reduce duplication.

use zone_exposure::records::{RecordData, RecordSet};

/// Builds an address record with literal IPv4 values.
#[allow(dead_code)] // Used by other test files
pub fn literal_a(name: &str, values: &[&str]) -> RecordSet {
    RecordSet::new(
        name,
        RecordData::Address {
            values: values.iter().map(|v| v.to_string()).collect(),
        },
    )
}

/// Builds an alias-to-resource address record.
#[allow(dead_code)] // Used by other test files
pub fn alias(name: &str, target: &str) -> RecordSet {
    RecordSet::new(
        name,
        RecordData::Alias {
            target: target.to_string(),
        },
    )
}

/// Builds a canonical-name record.
#[allow(dead_code)] // Used by other test files
pub fn cname(name: &str, target: &str) -> RecordSet {
    RecordSet::new(
        name,
        RecordData::CanonicalName {
            target: target.to_string(),
        },
    )
}
