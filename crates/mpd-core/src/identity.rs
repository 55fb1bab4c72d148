//! # Record Identity
//!
//! A record's `id` is never written by authors; it is the base name of the
//! file the record came from, with the final extension removed
//! (`content/posts/hello.world.mpd` → `hello.world`).
//!
//! Two files with the same base name in different directories produce the
//! same id. Collisions are reported by the aggregator, not rejected here.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Identifier of a record, derived from its source file name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Derive the id from a record file path.
    ///
    /// Returns `None` when the path has no file name or the stem is not
    /// valid UTF-8.
    pub fn from_path(path: &Path) -> Option<Self> {
        let stem = path.file_stem()?.to_str()?;
        if stem.is_empty() {
            return None;
        }
        Some(Self(stem.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
