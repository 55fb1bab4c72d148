//! # mpd-pack: Collection Artifact Building
//!
//! Composes the build pipeline around the per-file validator:
//!
//! - **Collect** (`collect.rs`): finds every `.mpd` file under the content
//!   root (`item/` by default), in a deterministic order, along with any
//!   entries that could not be read.
//! - **Process** (`pipeline.rs`): validates every discovered file, keeping
//!   going past failures and recording each one with its path.
//! - **Aggregate** (`aggregate.rs`): orders records newest first, drops
//!   the sort key, and writes `{ "items": [...] }`.
//!
//! ## Crate Policy
//!
//! - All-or-nothing output: if any file failed, no artifact is written and
//!   an existing artifact is left untouched.
//! - Same inputs and same clock produce byte-identical artifacts.

pub mod aggregate;
pub mod collect;
pub mod error;
pub mod pipeline;

pub use aggregate::{
    aggregate, find_duplicate_ids, render_collection, write_artifact, Collection, DuplicateId,
};
pub use collect::{collect_record_files, Discovery, RECORD_EXTENSION};
pub use error::BuildError;
pub use pipeline::{
    build, process, BuildOptions, BuildSummary, FileFailure, ProcessReport, DEFAULT_CONTENT_ROOT,
    DEFAULT_OUTPUT,
};
