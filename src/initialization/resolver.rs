//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::InitializationError;

/// Initializes the DNS resolver used to chase aliases and CNAME targets.
///
/// Creates a resolver with default upstream configuration and aggressive
/// timeouts to prevent hanging on slow or unresponsive DNS servers. The
/// per-query timeout is the run's effective suspension bound for each hop.
///
/// # Returns
///
/// A configured `TokioAsyncResolver` wrapped in `Arc` for sharing across
/// concurrent resolution tasks.
pub fn init_resolver() -> Result<Arc<TokioAsyncResolver>, InitializationError> {
    use hickory_resolver::config::{ResolverConfig, ResolverOpts};

    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(crate::config::DNS_TIMEOUT_SECS);
    opts.attempts = 2; // Reduce retry attempts to fail faster
    opts.ndots = 0; // Never append search domains to zone record names

    Ok(Arc::new(TokioAsyncResolver::tokio(
        ResolverConfig::default(),
        opts,
    )))
}
