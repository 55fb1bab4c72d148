//! # Records
//!
//! [`Record`] is the shape written to the collection artifact: every field
//! concrete, defaults already filled. [`NormalizedRecord`] is what the
//! validator hands to the aggregator: the record plus its transient
//! [`SortKey`] and the file it came from. Dropping the wrapper is the only
//! way to obtain a serializable record, so the sort key is stripped by
//! construction.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::identity::RecordId;
use crate::temporal::TimeOfDay;

/// One normalized content entry, as emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    pub url: String,
    pub year: i32,
    pub month: u32,
    pub date: u32,
    pub time: TimeOfDay,
    pub tags: Vec<String>,
    pub id: RecordId,
    /// Author-supplied keys outside the known field set, carried through
    /// unchanged.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Lexicographically sortable `YYYY-MM-DDThh:mm:ss` key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey(String);

impl SortKey {
    pub fn new(year: i32, month: u32, date: u32, time: TimeOfDay) -> Self {
        Self(format!("{year:04}-{month:02}-{date:02}T{time}"))
    }

    /// Key for an already-normalized record.
    pub fn for_record(record: &Record) -> Self {
        Self::new(record.year, record.month, record.date, record.time)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A record ready for aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    record: Record,
    sort_key: SortKey,
    source: PathBuf,
}

impl NormalizedRecord {
    /// Wrap a record, deriving its sort key from the record's own fields.
    pub fn new(record: Record, source: impl Into<PathBuf>) -> Self {
        let sort_key = SortKey::for_record(&record);
        Self {
            record,
            sort_key,
            source: source.into(),
        }
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn sort_key(&self) -> &SortKey {
        &self.sort_key
    }

    /// The file this record was read from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Discard the sort key and source, keeping only the emitted shape.
    pub fn into_record(self) -> Record {
        self.record
    }
}
