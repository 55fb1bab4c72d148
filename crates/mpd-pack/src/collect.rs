//! # Record Discovery
//!
//! Walks the content root recursively and returns every regular file whose
//! extension is exactly `mpd`. The list is sorted by path; that order is the
//! discovery order used to break ties when records share a timestamp.
//! Entries the walk cannot read are returned alongside the files rather than
//! skipped.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// File extension of record files (without the dot).
pub const RECORD_EXTENSION: &str = "mpd";

/// Outcome of walking the content root.
#[derive(Debug, Default)]
pub struct Discovery {
    /// Record files found, sorted by path.
    pub files: Vec<PathBuf>,
    /// Entries the walk could not read (dangling symlinks, unreadable
    /// directories), in walk order. Each one counts as a failed file.
    pub errors: Vec<walkdir::Error>,
}

impl Discovery {
    /// Number of record files plus unreadable entries.
    pub fn len(&self) -> usize {
        self.files.len() + self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.errors.is_empty()
    }
}

/// Find all record files under `root`.
///
/// A missing root, or one with no record files, yields an empty discovery.
/// Entries that cannot be read are returned in [`Discovery::errors`].
pub fn collect_record_files(root: &Path) -> Discovery {
    if !root.is_dir() {
        tracing::warn!(
            root = %root.display(),
            "content root is not a directory; no records collected"
        );
        return Discovery::default();
    }

    let mut discovery = Discovery::default();
    for entry in WalkDir::new(root).follow_links(true) {
        match entry {
            Ok(entry) if entry.file_type().is_file() && is_record_file(entry.path()) => {
                discovery.files.push(entry.into_path());
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(error = %e, "failed to read entry during content walk");
                discovery.errors.push(e);
            }
        }
    }

    discovery.files.sort();
    tracing::info!(
        root = %root.display(),
        count = discovery.files.len(),
        unreadable = discovery.errors.len(),
        "collected record files"
    );
    discovery
}

fn is_record_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(RECORD_EXTENSION)
}
