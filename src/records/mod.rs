//! DNS record model and interpretation.
//!
//! A [`RecordSet`] is one qualifying record from a hosted zone, already
//! narrowed by the fetch stage to the shapes the audit handles: a literal
//! address record, an alias to another resource's name, or a CNAME.
//! [`interpret_record`] turns one record into its candidate addresses,
//! pre-classification.

use serde::{Deserialize, Serialize};

use crate::dns::{resolve_name, RecordLookup, ResolveError};

/// The payload of a qualifying zone record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordData {
    /// Address record carrying literal IPv4 values.
    Address { values: Vec<String> },
    /// Address record aliasing another resource's DNS name.
    Alias { target: String },
    /// CNAME record redirecting to another name.
    CanonicalName { target: String },
}

/// One record from a hosted zone: the owner name plus its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSet {
    /// The record's owner name, as the zone stores it.
    pub name: String,
    /// The record payload.
    pub data: RecordData,
}

impl RecordSet {
    /// Builds a record from its owner name and payload.
    pub fn new(name: impl Into<String>, data: RecordData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// Produces the candidate addresses a record ultimately points to.
///
/// Literal address records return their values directly; alias and CNAME
/// records resolve their target through [`resolve_name`]. The caller
/// classifies the candidates afterwards.
///
/// # Errors
///
/// Propagates [`ResolveError`] from the resolver when a target lookup
/// fails or its chain is defective. Literal records cannot fail.
pub async fn interpret_record(
    lookup: &dyn RecordLookup,
    record: &RecordSet,
) -> Result<Vec<String>, ResolveError> {
    match &record.data {
        RecordData::Address { values } => Ok(values.clone()),
        RecordData::Alias { target } => resolve_name(lookup, target).await,
        RecordData::CanonicalName { target } => resolve_name(lookup, target).await,
    }
}
