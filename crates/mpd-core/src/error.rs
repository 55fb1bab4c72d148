//! # Error Types: Per-File Error Taxonomy
//!
//! Every failure that can happen while turning one record file into a
//! normalized record falls into exactly one of three kinds:
//!
//! - [`RecordError::Parse`]: the content is not a well-formed YAML mapping.
//! - [`RecordError::Validation`]: well-formed content breaks one or more
//!   field rules. Carries every violation found, not just the first.
//! - [`RecordError::Unexpected`]: anything else (unreadable file, bad
//!   encoding, unusable file name).
//!
//! All three are non-fatal to the other files in a run and fatal to the
//! run's exit status. Display output is a single line so each failure maps
//! to exactly one diagnostic line.

use std::fmt;

use thiserror::Error;

/// A single field rule violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The offending field, with an index suffix for sequence elements
    /// (e.g. `tags[1]`).
    pub field: String,
    /// Human-readable description naming the offending value.
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordered collection of violations found in one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation against `field`.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.violations.push(Violation::new(field, message));
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations, in the order they were found.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns true if any violation is reported against `field`.
    pub fn mentions(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Failure to turn one record file into a normalized record.
#[derive(Error, Debug)]
pub enum RecordError {
    /// The file content is not well-formed structured data.
    #[error("parse error in {path}: {reason}")]
    Parse {
        /// Path of the offending file.
        path: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// Well-formed content failed one or more field rules.
    #[error("validation failed for {path} ({} violation(s)): {violations}", .violations.len())]
    Validation {
        /// Path of the offending file.
        path: String,
        /// Every violation found in the file.
        violations: Violations,
    },

    /// Any other per-file failure.
    #[error("unexpected error processing {path}: {reason}")]
    Unexpected {
        /// Path of the offending file.
        path: String,
        /// What went wrong.
        reason: String,
    },
}

impl RecordError {
    /// Path of the file this error belongs to.
    pub fn path(&self) -> &str {
        match self {
            Self::Parse { path, .. }
            | Self::Validation { path, .. }
            | Self::Unexpected { path, .. } => path,
        }
    }

    /// Short, stable name of the error kind for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "parse",
            Self::Validation { .. } => "validation",
            Self::Unexpected { .. } => "unexpected",
        }
    }
}

/// A string that is not a valid `HH:MM:SS` time of day.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemporalError {
    /// Wrong shape: not exactly two digits, colon, two digits, colon, two digits.
    #[error("{0:?} is not a zero-padded HH:MM:SS time")]
    Malformed(String),

    /// Right shape, but hour, minute, or second out of range.
    #[error("{0:?} is not a valid 24-hour time")]
    OutOfRange(String),
}
