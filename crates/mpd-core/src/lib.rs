//! # mpd-core: Foundational Types for the mpd Content Build
//!
//! Defines the record model shared by every stage of the build: the
//! emitted [`Record`], its transient [`SortKey`], validated
//! [`TimeOfDay`] values, the [`Clock`] capability used for default
//! timestamps, and the per-file error taxonomy.
//!
//! ## Key Design Principles
//!
//! 1. **The sort key never reaches the artifact.** Ordering data lives on
//!    [`NormalizedRecord`]; only [`Record`] is serialized, so the internal
//!    field cannot leak by construction.
//!
//! 2. **Time is injected.** Default dates come from a [`Clock`], never from
//!    a direct wall-clock read, so builds are reproducible under
//!    [`FixedClock`].
//!
//! 3. **Violations accumulate.** [`Violations`] collects every problem in a
//!    file before a single [`RecordError::Validation`] is raised.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `mpd-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod record;
pub mod temporal;

pub use error::{RecordError, TemporalError, Violation, Violations};
pub use identity::RecordId;
pub use record::{NormalizedRecord, Record, SortKey};
pub use temporal::{Clock, FixedClock, SystemClock, TimeOfDay};
