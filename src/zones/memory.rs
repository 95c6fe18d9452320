//! In-memory zone store.

use std::collections::HashSet;

use anyhow::{bail, Result};

use crate::records::RecordSet;

use super::{Zone, ZoneStore};

/// [`ZoneStore`] over preloaded zones and records.
///
/// The substitutable test double: zones and records are handed in up front,
/// and chosen zones can be made to fail their record fetch to exercise the
/// pipeline's skip-and-continue path.
#[derive(Debug, Default)]
pub struct MemoryZoneStore {
    zones: Vec<(Zone, Vec<RecordSet>)>,
    failing: HashSet<String>,
}

impl MemoryZoneStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a public zone with its qualifying records.
    pub fn with_zone(mut self, id: &str, name: &str, records: Vec<RecordSet>) -> Self {
        self.zones.push((
            Zone {
                id: id.to_string(),
                name: name.to_string(),
            },
            records,
        ));
        self
    }

    /// Makes record fetches for a zone fail, simulating a service outage.
    pub fn with_failing_zone(mut self, id: &str, name: &str) -> Self {
        self.zones.push((
            Zone {
                id: id.to_string(),
                name: name.to_string(),
            },
            Vec::new(),
        ));
        self.failing.insert(id.to_string());
        self
    }
}

#[async_trait::async_trait]
impl ZoneStore for MemoryZoneStore {
    async fn list_public_zones(&self) -> Result<Vec<Zone>> {
        Ok(self.zones.iter().map(|(zone, _)| zone.clone()).collect())
    }

    async fn list_records(&self, zone_id: &str) -> Result<Vec<RecordSet>> {
        if self.failing.contains(zone_id) {
            bail!("simulated record fetch failure for zone {zone_id}");
        }
        Ok(self
            .zones
            .iter()
            .find(|(zone, _)| zone.id == zone_id)
            .map(|(_, records)| records.clone())
            .unwrap_or_default())
    }
}
