//! # Build Errors
//!
//! A build ends in one of two failures: some record files were rejected
//! (the artifact is withheld), or every file was fine but the artifact could
//! not be written.

use std::path::PathBuf;

use thiserror::Error;

use crate::pipeline::FileFailure;

/// Why a build produced no artifact.
#[derive(Error, Debug)]
pub enum BuildError {
    /// One or more record files failed; nothing was written.
    #[error("{} of {discovered} record file(s) failed; no artifact written", .failures.len())]
    RecordsFailed {
        /// Number of record files discovered.
        discovered: usize,
        /// Every failure, in discovery order.
        failures: Vec<FileFailure>,
    },

    /// The collection could not be serialized.
    #[error("failed to serialize collection: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The artifact or its directory could not be written.
    #[error("failed to write artifact {}: {source}", .path.display())]
    Write {
        /// Target path of the write that failed.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
