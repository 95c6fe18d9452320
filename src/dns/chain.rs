//! CNAME chain resolution.
//!
//! Resolves a DNS name to the IPv4 addresses it ultimately points to,
//! following CNAME indirection. The walk is an explicit depth-first loop
//! carrying a visited-name set and a hop budget, so a chain that loops back
//! on itself or runs away is rejected instead of followed forever.

use std::collections::HashSet;

use thiserror::Error;

use crate::config::MAX_CHAIN_HOPS;

use super::lookup::{normalize_name, LookupError, RecordLookup};

/// Failure while resolving a name to addresses.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The CNAME chain revisited a name it had already followed.
    #[error("CNAME chain starting at {start} loops back to {name}")]
    ChainLoop { start: String, name: String },

    /// The CNAME chain visited more names than the hop budget allows.
    #[error("CNAME chain starting at {start} exceeds {max} hops")]
    ChainTooLong { start: String, max: usize },

    /// An underlying DNS query failed.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Resolves `name` to the list of IPv4 addresses it ultimately points to.
///
/// For each name visited, its A-record addresses are appended in response
/// order, then its CNAME targets are followed depth-first in record order.
/// The result is order-preserving and not deduplicated. A name with no A
/// and no CNAME records resolves to an empty list.
///
/// # Errors
///
/// Returns [`ResolveError::ChainLoop`] when a chain revisits a name,
/// [`ResolveError::ChainTooLong`] past [`MAX_CHAIN_HOPS`] names, and
/// [`ResolveError::Lookup`] when any underlying query fails. Callers skip
/// the affected record and continue the run.
pub async fn resolve_name(
    lookup: &dyn RecordLookup,
    name: &str,
) -> Result<Vec<String>, ResolveError> {
    let mut addresses = Vec::new();
    let mut visited: HashSet<String> = HashSet::new();
    // LIFO stack; targets are pushed in reverse so the walk visits them in
    // record order.
    let mut stack = vec![normalize_name(name)];

    while let Some(current) = stack.pop() {
        if visited.len() >= MAX_CHAIN_HOPS {
            return Err(ResolveError::ChainTooLong {
                start: name.to_string(),
                max: MAX_CHAIN_HOPS,
            });
        }
        if !visited.insert(current.clone()) {
            return Err(ResolveError::ChainLoop {
                start: name.to_string(),
                name: current,
            });
        }

        addresses.extend(lookup.ipv4_records(&current).await?);

        let targets = lookup.cname_targets(&current).await?;
        for target in targets.into_iter().rev() {
            stack.push(normalize_name(&target));
        }
    }

    Ok(addresses)
}
