//! Configuration constants.
//!
//! This module defines the operational parameters used throughout the
//! application: timeouts, concurrency limits, and resolution bounds.

// Network operation timeouts
/// DNS query timeout in seconds
/// Most DNS queries complete in <1s; 3s provides a buffer while failing fast
/// on slow or unresponsive DNS servers
pub const DNS_TIMEOUT_SECS: u64 = 3;

/// Maximum concurrent record resolutions (semaphore limit)
pub const DEFAULT_MAX_CONCURRENCY: usize = 16;

// Resolution bounds
/// Maximum number of names visited while following a CNAME chain
/// Legitimate chains rarely exceed 3-4 hops; 16 leaves ample headroom
pub const MAX_CHAIN_HOPS: usize = 16;
