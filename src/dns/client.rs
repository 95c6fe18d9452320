//! Live DNS lookups via `hickory-resolver`.

use std::sync::Arc;

use hickory_resolver::error::ResolveErrorKind;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use super::lookup::{LookupError, RecordLookup};

/// [`RecordLookup`] implementation backed by a shared `hickory-resolver`
/// instance.
///
/// `NoRecordsFound` covers both "no records of this type" and NXDOMAIN in
/// hickory, and both map to an empty answer here. Everything else (timeouts,
/// SERVFAIL, network errors) surfaces as a [`LookupError`].
#[derive(Clone)]
pub struct HickoryLookup {
    resolver: Arc<TokioAsyncResolver>,
}

impl HickoryLookup {
    /// Wraps a shared resolver instance.
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }

    async fn query(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, LookupError> {
        match self.resolver.lookup(name, record_type).await {
            Ok(lookup) => {
                let values: Vec<String> = lookup
                    .iter()
                    .filter_map(|rdata| match rdata {
                        RData::A(addr) if record_type == RecordType::A => {
                            Some(addr.to_string())
                        }
                        RData::CNAME(target) if record_type == RecordType::CNAME => {
                            Some(target.to_utf8())
                        }
                        _ => None,
                    })
                    .collect();
                Ok(values)
            }
            Err(e) => {
                if matches!(e.kind(), ResolveErrorKind::NoRecordsFound { .. }) {
                    return Ok(Vec::new());
                }
                log::warn!("{record_type} record lookup failed for {name}: {e}");
                Err(LookupError {
                    name: name.to_string(),
                    message: e.to_string(),
                })
            }
        }
    }
}

#[async_trait::async_trait]
impl RecordLookup for HickoryLookup {
    async fn ipv4_records(&self, name: &str) -> Result<Vec<String>, LookupError> {
        self.query(name, RecordType::A).await
    }

    async fn cname_targets(&self, name: &str) -> Result<Vec<String>, LookupError> {
        self.query(name, RecordType::CNAME).await
    }
}
