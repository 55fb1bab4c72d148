//! # Build Subcommand
//!
//! Runs the full pipeline and writes the collection artifact. Prints every
//! per-file failure before exiting non-zero; a failed build never touches
//! the existing artifact.

use anyhow::{Context, Result};

use mpd_core::Clock;
use mpd_pack::{BuildError, BuildOptions};
use mpd_schema::RecordValidator;

/// Execute the build with the local wall clock.
///
/// Returns exit code: 0 on success, 1 if any record file failed.
pub fn run_build(options: &BuildOptions) -> Result<u8> {
    run_build_with(&RecordValidator::new(), options)
}

/// Execute the build with a caller-supplied validator (and so clock).
pub fn run_build_with<C: Clock>(
    validator: &RecordValidator<C>,
    options: &BuildOptions,
) -> Result<u8> {
    tracing::info!(
        content_root = %options.content_root.display(),
        output = %options.output.display(),
        "building collection"
    );

    match mpd_pack::build(validator, options) {
        Ok(summary) => {
            println!(
                "OK: processed {} record(s) into {}",
                summary.count,
                summary.output.display()
            );
            Ok(0)
        }
        Err(BuildError::RecordsFailed {
            discovered,
            failures,
        }) => {
            crate::report_failures(&failures);
            eprintln!(
                "{} of {discovered} record file(s) failed; {} was not written",
                failures.len(),
                options.output.display()
            );
            Ok(1)
        }
        Err(e) => Err(e).with_context(|| format!("failed to build {}", options.output.display())),
    }
}
