//! Hosted-zone collaborators.
//!
//! [`ZoneStore`] is the seam over the DNS-hosting service: enumerate public
//! zones, fetch the qualifying records of each. The audit consumes a
//! [`FileZoneStore`] over a JSON snapshot of the hosting service's state;
//! [`MemoryZoneStore`] substitutes for it in tests.

mod file;
mod memory;

pub use file::FileZoneStore;
pub use memory::MemoryZoneStore;

use anyhow::Result;

use crate::records::RecordSet;

/// One hosted zone: the service's opaque identifier plus the zone name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    /// The hosting service's zone identifier.
    pub id: String,
    /// The zone's apex name.
    pub name: String,
}

/// Async source of zones and their qualifying records.
///
/// Implementations return only address-type and canonical-name-type records
/// from `list_records`; other record types and malformed entries never reach
/// the interpreter. Pagination of the upstream service is the
/// implementation's concern and invisible here.
#[async_trait::async_trait]
pub trait ZoneStore: Send + Sync {
    /// Lists the zones not marked private.
    async fn list_public_zones(&self) -> Result<Vec<Zone>>;

    /// Lists the qualifying records of one zone.
    async fn list_records(&self, zone_id: &str) -> Result<Vec<RecordSet>>;
}
