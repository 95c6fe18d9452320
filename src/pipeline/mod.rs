//! Inventory pipeline.
//!
//! Orchestrates the audit: enumerate public zones, fetch each zone's
//! qualifying records, interpret every record into candidate addresses,
//! classify the candidates, and keep the public ones as `(name, address)`
//! rows.
//!
//! Records are independent of one another, so they resolve concurrently
//! under a bounded buffer; each CNAME chain stays sequential internally.
//! A failed record (or a failed record fetch for a zone) is skipped, logged
//! with the offending name, and tallied in the run statistics; only zone
//! enumeration failures abort the run.

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use log::{debug, info, warn};

use crate::classify::{classify_address, IpClass};
use crate::config::MalformedIpPolicy;
use crate::dns::{RecordLookup, ResolveError};
use crate::error_handling::{ErrorType, RunStats, WarningType};
use crate::records::{interpret_record, RecordSet};
use crate::zones::ZoneStore;

/// One emitted inventory pair: a zone record's name and a public address it
/// resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRow {
    /// The zone record's owner name.
    pub name: String,
    /// A public address the name resolves to.
    pub address: String,
}

/// Aggregate result of a pipeline pass.
#[derive(Debug)]
pub struct PipelineOutcome {
    /// Emitted rows, in zone/record/candidate order.
    pub rows: Vec<InventoryRow>,
    /// Public zones visited.
    pub zones: usize,
    /// Qualifying records processed.
    pub records: usize,
    /// Records skipped because interpretation failed.
    pub failed_records: usize,
}

struct RecordOutcome {
    rows: Vec<InventoryRow>,
    failed: bool,
}

/// Runs the full inventory over every public zone in the store.
///
/// # Errors
///
/// Fails only when zone enumeration itself fails; record-level and
/// zone-record-fetch failures degrade the output and are reported through
/// `stats` instead.
pub async fn run_pipeline(
    store: &dyn ZoneStore,
    lookup: &dyn RecordLookup,
    stats: &RunStats,
    malformed_ips: MalformedIpPolicy,
    max_concurrency: usize,
) -> Result<PipelineOutcome> {
    let zones = store
        .list_public_zones()
        .await
        .context("Failed to enumerate public zones")?;
    info!("Auditing {} public zone(s)", zones.len());

    let mut rows = Vec::new();
    let mut records_processed = 0;
    let mut failed_records = 0;
    let zone_count = zones.len();

    for zone in zones {
        let records = match store.list_records(&zone.id).await {
            Ok(records) => records,
            Err(e) => {
                warn!("Failed to fetch records for zone {} ({}): {e:#}", zone.name, zone.id);
                stats.increment_error(ErrorType::ZoneRecordFetch);
                continue;
            }
        };

        if records.is_empty() {
            debug!("Zone {} has no qualifying records", zone.name);
            continue;
        }

        records_processed += records.len();

        // Bounded concurrency across records; `buffered` preserves record
        // order in the output.
        let outcomes: Vec<RecordOutcome> = stream::iter(records)
            .map(|record| async move {
                process_record(lookup, &record, stats, malformed_ips).await
            })
            .buffered(max_concurrency.max(1))
            .collect()
            .await;

        for outcome in outcomes {
            if outcome.failed {
                failed_records += 1;
            }
            rows.extend(outcome.rows);
        }
    }

    Ok(PipelineOutcome {
        rows,
        zones: zone_count,
        records: records_processed,
        failed_records,
    })
}

/// Interprets one record and classifies its candidates.
///
/// A failed interpretation contributes no rows; classification then drops
/// private addresses and applies the malformed-address policy.
async fn process_record(
    lookup: &dyn RecordLookup,
    record: &RecordSet,
    stats: &RunStats,
    malformed_ips: MalformedIpPolicy,
) -> RecordOutcome {
    let candidates = match interpret_record(lookup, record).await {
        Ok(candidates) => candidates,
        Err(e) => {
            warn!("Failed to resolve record {}: {e}", record.name);
            stats.increment_error(match e {
                ResolveError::Lookup(_) => ErrorType::DnsLookup,
                ResolveError::ChainLoop { .. } | ResolveError::ChainTooLong { .. } => {
                    ErrorType::ResolutionChain
                }
            });
            return RecordOutcome {
                rows: Vec::new(),
                failed: true,
            };
        }
    };

    let mut rows = Vec::new();
    for address in candidates {
        match classify_address(&address) {
            IpClass::Public => rows.push(InventoryRow {
                name: record.name.clone(),
                address,
            }),
            IpClass::Private => {
                debug!("Dropping private address {address} for {}", record.name);
            }
            IpClass::Malformed => match malformed_ips {
                // Legacy behavior: anything not provably private counts as
                // public.
                MalformedIpPolicy::Public => {
                    debug!(
                        "Treating malformed address {address:?} for {} as public",
                        record.name
                    );
                    rows.push(InventoryRow {
                        name: record.name.clone(),
                        address,
                    });
                }
                MalformedIpPolicy::Drop => {
                    warn!(
                        "Dropping malformed address {address:?} for {}",
                        record.name
                    );
                    stats.increment_warning(WarningType::MalformedAddress);
                }
            },
        }
    }

    RecordOutcome { rows, failed: false }
}
