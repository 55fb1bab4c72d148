//! # Build Pipeline
//!
//! Collect → validate each file → aggregate. Per-file failures never stop
//! the loop; they are gathered as [`FileFailure`]s and checked only once
//! every file has been attempted. The artifact is written only when that
//! list is empty.

use std::path::{Path, PathBuf};

use mpd_core::{Clock, NormalizedRecord, RecordError};
use mpd_schema::RecordValidator;

use crate::aggregate::{aggregate, find_duplicate_ids, write_artifact, DuplicateId};
use crate::collect::collect_record_files;
use crate::error::BuildError;

/// Default directory scanned for record files.
pub const DEFAULT_CONTENT_ROOT: &str = "item";

/// Default location of the collection artifact.
pub const DEFAULT_OUTPUT: &str = "data/items.json";

/// Where to read records from and where to write the artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    pub content_root: PathBuf,
    pub output: PathBuf,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            content_root: PathBuf::from(DEFAULT_CONTENT_ROOT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// A record file that could not be normalized.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: RecordError,
}

/// Outcome of validating every discovered file.
#[derive(Debug)]
pub struct ProcessReport {
    /// Number of record files found under the content root, counting
    /// entries the walk could not read.
    pub discovered: usize,
    /// Successfully normalized records, in discovery order.
    pub records: Vec<NormalizedRecord>,
    /// Unreadable entries first, then failed files in discovery order.
    pub failures: Vec<FileFailure>,
}

impl ProcessReport {
    /// True when every discovered file normalized cleanly.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Result of a successful build.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildSummary {
    /// Number of records written.
    pub count: usize,
    pub output: PathBuf,
    /// Ids shared by several files. Reported, not rejected.
    pub duplicate_ids: Vec<DuplicateId>,
}

/// Collect and validate every record file under `content_root`.
pub fn process<C: Clock>(validator: &RecordValidator<C>, content_root: &Path) -> ProcessReport {
    let discovery = collect_record_files(content_root);
    let discovered = discovery.len();
    let mut records = Vec::with_capacity(discovery.files.len());
    let mut failures = Vec::new();

    for walk_error in discovery.errors {
        let path = walk_error
            .path()
            .map_or_else(|| content_root.to_path_buf(), Path::to_path_buf);
        failures.push(FileFailure {
            error: RecordError::Unexpected {
                path: path.display().to_string(),
                reason: format!("cannot read entry: {walk_error}"),
            },
            path,
        });
    }

    for path in &discovery.files {
        match validator.validate_file(path) {
            Ok(record) => records.push(record),
            Err(error) => {
                tracing::debug!(
                    path = %path.display(),
                    kind = error.kind(),
                    "record file rejected"
                );
                failures.push(FileFailure {
                    path: path.clone(),
                    error,
                });
            }
        }
    }

    ProcessReport {
        discovered,
        records,
        failures,
    }
}

/// Run the full pipeline and write the artifact.
///
/// # Errors
///
/// - [`BuildError::RecordsFailed`] if any file failed; nothing is written
///   and an existing artifact is left as it was.
/// - [`BuildError::Serialize`] / [`BuildError::Write`] if the artifact
///   could not be produced.
pub fn build<C: Clock>(
    validator: &RecordValidator<C>,
    options: &BuildOptions,
) -> Result<BuildSummary, BuildError> {
    let report = process(validator, &options.content_root);
    if !report.is_success() {
        return Err(BuildError::RecordsFailed {
            discovered: report.discovered,
            failures: report.failures,
        });
    }

    let duplicate_ids = find_duplicate_ids(&report.records);
    for dup in &duplicate_ids {
        tracing::warn!(
            id = %dup.id,
            sources = ?dup.sources,
            "record id is shared by multiple files"
        );
    }

    let collection = aggregate(report.records);
    write_artifact(&collection, &options.output)?;

    Ok(BuildSummary {
        count: collection.len(),
        output: options.output.clone(),
        duplicate_ids,
    })
}
