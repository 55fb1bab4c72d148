//! # Record Validator
//!
//! [`RecordValidator`] is the per-file stage of the build. For one file it:
//!
//! 1. reads the bytes (failures are [`RecordError::Unexpected`]),
//! 2. parses the YAML mapping (failures are [`RecordError::Parse`]),
//! 3. runs every field rule, collecting all violations
//!    ([`RecordError::Validation`] if there are any),
//! 4. fills absent `year`/`month`/`date`/`time` from its clock and absent
//!    `tags` with an empty list,
//! 5. derives `id` from the file name and wraps the result with its sort key.
//!
//! The clock is read once per file, so every defaulted field of a record
//! comes from the same instant.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::Datelike;
use mpd_core::{
    Clock, NormalizedRecord, Record, RecordError, RecordId, SystemClock, TimeOfDay, Violations,
};

use crate::document::parse_document;
use crate::rules::{check_fields, CheckedFields, KNOWN_FIELDS, RESERVED_FIELDS};

/// Validates and normalizes record files.
#[derive(Debug, Clone, Default)]
pub struct RecordValidator<C = SystemClock> {
    clock: C,
}

impl RecordValidator<SystemClock> {
    /// A validator that stamps defaults with the local wall-clock time.
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> RecordValidator<C> {
    /// A validator that stamps defaults with `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Read and normalize the record file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Unexpected`] if the file cannot be read or is
    /// not UTF-8, and otherwise whatever [`Self::validate_str`] returns.
    pub fn validate_file(&self, path: &Path) -> Result<NormalizedRecord, RecordError> {
        let bytes = std::fs::read(path).map_err(|e| RecordError::Unexpected {
            path: path.display().to_string(),
            reason: format!("cannot read file: {e}"),
        })?;
        let content = String::from_utf8(bytes).map_err(|e| RecordError::Unexpected {
            path: path.display().to_string(),
            reason: format!("content is not valid UTF-8: {e}"),
        })?;
        self.validate_str(path, &content)
    }

    /// Normalize already-read record text. `path` names the source file and
    /// determines the record id.
    ///
    /// # Errors
    ///
    /// - [`RecordError::Parse`] if `content` is not a YAML mapping.
    /// - [`RecordError::Validation`] listing every rule violation.
    /// - [`RecordError::Unexpected`] if no id can be derived from `path`.
    pub fn validate_str(
        &self,
        path: &Path,
        content: &str,
    ) -> Result<NormalizedRecord, RecordError> {
        let doc = parse_document(content).map_err(|reason| RecordError::Parse {
            path: path.display().to_string(),
            reason,
        })?;

        let mut violations = Violations::new();
        let fields = check_fields(&doc, &mut violations);
        if !violations.is_empty() {
            return Err(RecordError::Validation {
                path: path.display().to_string(),
                violations,
            });
        }

        let id = RecordId::from_path(path).ok_or_else(|| RecordError::Unexpected {
            path: path.display().to_string(),
            reason: "cannot derive a record id from the file name".to_string(),
        })?;

        let extra: BTreeMap<String, serde_json::Value> = doc
            .into_iter()
            .filter(|(k, _)| !KNOWN_FIELDS.contains(&k.as_str()))
            .filter(|(k, _)| !RESERVED_FIELDS.contains(&k.as_str()))
            .collect();

        let record = self
            .fill_defaults(fields, id, extra)
            .ok_or_else(|| RecordError::Unexpected {
                path: path.display().to_string(),
                reason: "validated field lost during normalization".to_string(),
            })?;

        tracing::debug!(
            path = %path.display(),
            id = %record.id,
            "normalized record"
        );

        Ok(NormalizedRecord::new(record, path))
    }

    /// Build the emitted record, taking absent date/time fields from the clock.
    ///
    /// Returns `None` only if a required field is missing, which
    /// [`check_fields`] has already ruled out.
    fn fill_defaults(
        &self,
        fields: CheckedFields,
        id: RecordId,
        extra: BTreeMap<String, serde_json::Value>,
    ) -> Option<Record> {
        let now = self.clock.now();

        // Ranges were checked, so these narrowings cannot fail.
        let year = match fields.year {
            Some(y) => i32::try_from(y).ok()?,
            None => now.year(),
        };
        let month = match fields.month {
            Some(m) => u32::try_from(m).ok()?,
            None => now.month(),
        };
        let date = match fields.date {
            Some(d) => u32::try_from(d).ok()?,
            None => now.day(),
        };
        let time = fields.time.unwrap_or_else(|| TimeOfDay::from_naive(now.time()));

        Some(Record {
            title: fields.title?,
            url: fields.url?,
            year,
            month,
            date,
            time,
            tags: fields.tags.unwrap_or_default(),
            id,
            extra,
        })
    }
}
