//! File-backed zone store.
//!
//! Reads a JSON snapshot of the hosting service's zones and records, the
//! shape produced by exporting the service's API responses: each zone with
//! an id, name, private flag, and record sets; each record set with a type,
//! literal values, and optionally an alias target in place of values.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::Deserialize;

use crate::records::{RecordData, RecordSet};

use super::{Zone, ZoneStore};

#[derive(Debug, Deserialize)]
struct RawSnapshot {
    zones: Vec<RawZone>,
}

#[derive(Debug, Deserialize)]
struct RawZone {
    id: String,
    name: String,
    #[serde(default)]
    private: bool,
    #[serde(default)]
    records: Vec<RawRecord>,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    name: String,
    #[serde(rename = "type")]
    record_type: String,
    #[serde(default)]
    values: Vec<String>,
    #[serde(default)]
    alias_target: Option<String>,
}

/// [`ZoneStore`] over a zone snapshot file.
///
/// The snapshot is parsed eagerly at load time: private zones are dropped,
/// records are narrowed to address and canonical-name types, and malformed
/// entries (an address record with neither values nor an alias target) are
/// skipped with a warning. An unreadable or unparsable snapshot is fatal.
#[derive(Debug)]
pub struct FileZoneStore {
    zones: Vec<Zone>,
    records: HashMap<String, Vec<RecordSet>>,
    malformed: usize,
}

impl FileZoneStore {
    /// Loads and validates a snapshot file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read zone snapshot {}", path.display()))?;
        let snapshot: RawSnapshot = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse zone snapshot {}", path.display()))?;

        let mut zones = Vec::new();
        let mut records = HashMap::new();
        let mut malformed = 0;

        for raw_zone in snapshot.zones {
            if raw_zone.private {
                debug!("Skipping private zone {} ({})", raw_zone.name, raw_zone.id);
                continue;
            }

            let mut zone_records = Vec::new();
            for raw in raw_zone.records {
                match convert_record(raw) {
                    Converted::Record(record) => zone_records.push(record),
                    Converted::OtherType => {}
                    Converted::Malformed(name) => {
                        warn!(
                            "Skipping malformed record {name} in zone {}: \
                             no values and no alias target",
                            raw_zone.name
                        );
                        malformed += 1;
                    }
                }
            }

            records.insert(raw_zone.id.clone(), zone_records);
            zones.push(Zone {
                id: raw_zone.id,
                name: raw_zone.name,
            });
        }

        Ok(Self {
            zones,
            records,
            malformed,
        })
    }

    /// Number of malformed records skipped at load time.
    pub fn malformed_record_count(&self) -> usize {
        self.malformed
    }
}

enum Converted {
    Record(RecordSet),
    OtherType,
    Malformed(String),
}

fn convert_record(raw: RawRecord) -> Converted {
    let data = match raw.record_type.as_str() {
        // An alias target takes precedence over literal values, matching
        // the hosting service's record shape.
        "A" => match raw.alias_target {
            Some(target) => RecordData::Alias { target },
            None if !raw.values.is_empty() => RecordData::Address { values: raw.values },
            None => return Converted::Malformed(raw.name),
        },
        "CNAME" => match raw.values.into_iter().next() {
            Some(target) => RecordData::CanonicalName { target },
            None => return Converted::Malformed(raw.name),
        },
        _ => return Converted::OtherType,
    };
    Converted::Record(RecordSet::new(raw.name, data))
}

#[async_trait::async_trait]
impl ZoneStore for FileZoneStore {
    async fn list_public_zones(&self) -> Result<Vec<Zone>> {
        Ok(self.zones.clone())
    }

    async fn list_records(&self, zone_id: &str) -> Result<Vec<RecordSet>> {
        Ok(self.records.get(zone_id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_snapshot(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write snapshot");
        file
    }

    #[tokio::test]
    async fn test_load_filters_private_zones() {
        let file = write_snapshot(
            r#"{
                "zones": [
                    {"id": "Z1", "name": "example.com.", "private": false, "records": []},
                    {"id": "Z2", "name": "corp.internal.", "private": true, "records": []}
                ]
            }"#,
        );
        let store = FileZoneStore::load(file.path()).unwrap();
        let zones = store.list_public_zones().await.unwrap();
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].id, "Z1");
    }

    #[tokio::test]
    async fn test_load_narrows_to_qualifying_record_types() {
        let file = write_snapshot(
            r#"{
                "zones": [{
                    "id": "Z1", "name": "example.com.",
                    "records": [
                        {"name": "www.example.com.", "type": "A", "values": ["93.184.216.34"]},
                        {"name": "app.example.com.", "type": "CNAME", "values": ["origin.example.com"]},
                        {"name": "example.com.", "type": "MX", "values": ["10 mail.example.com."]},
                        {"name": "example.com.", "type": "TXT", "values": ["v=spf1 -all"]}
                    ]
                }]
            }"#,
        );
        let store = FileZoneStore::load(file.path()).unwrap();
        let records = store.list_records("Z1").await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].data,
            RecordData::Address {
                values: vec!["93.184.216.34".to_string()]
            }
        );
        assert_eq!(
            records[1].data,
            RecordData::CanonicalName {
                target: "origin.example.com".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_load_maps_alias_records() {
        let file = write_snapshot(
            r#"{
                "zones": [{
                    "id": "Z1", "name": "example.com.",
                    "records": [
                        {"name": "lb.example.com.", "type": "A",
                         "alias_target": "my-lb.cloud-provider.example."}
                    ]
                }]
            }"#,
        );
        let store = FileZoneStore::load(file.path()).unwrap();
        let records = store.list_records("Z1").await.unwrap();
        assert_eq!(
            records[0].data,
            RecordData::Alias {
                target: "my-lb.cloud-provider.example.".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_load_skips_malformed_records_with_warning() {
        let file = write_snapshot(
            r#"{
                "zones": [{
                    "id": "Z1", "name": "example.com.",
                    "records": [
                        {"name": "empty.example.com.", "type": "A", "values": []},
                        {"name": "bare.example.com.", "type": "CNAME"},
                        {"name": "ok.example.com.", "type": "A", "values": ["192.0.2.1"]}
                    ]
                }]
            }"#,
        );
        let store = FileZoneStore::load(file.path()).unwrap();
        assert_eq!(store.malformed_record_count(), 2);
        let records = store.list_records("Z1").await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "ok.example.com.");
    }

    #[tokio::test]
    async fn test_unknown_zone_has_no_records() {
        let file = write_snapshot(r#"{"zones": []}"#);
        let store = FileZoneStore::load(file.path()).unwrap();
        assert!(store.list_records("Z404").await.unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_file_is_fatal() {
        let err = FileZoneStore::load(Path::new("/nonexistent/zones.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read zone snapshot"));
    }

    #[test]
    fn test_load_invalid_json_is_fatal() {
        let file = write_snapshot("not json at all");
        let err = FileZoneStore::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse zone snapshot"));
    }
}
