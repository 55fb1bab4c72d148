//! # Check Subcommand
//!
//! Validates every record file under the content root and reports the
//! result without writing anything.

use std::path::Path;

use anyhow::Result;

use mpd_core::Clock;
use mpd_pack::process;
use mpd_schema::RecordValidator;

/// Execute the check with the local wall clock.
///
/// Returns exit code: 0 if every file is valid, 1 otherwise.
pub fn run_check(content_root: &Path) -> Result<u8> {
    run_check_with(&RecordValidator::new(), content_root)
}

/// Execute the check with a caller-supplied validator.
pub fn run_check_with<C: Clock>(
    validator: &RecordValidator<C>,
    content_root: &Path,
) -> Result<u8> {
    let report = process(validator, content_root);
    crate::report_failures(&report.failures);

    if report.is_success() {
        println!(
            "OK: {} record file(s) valid under {}",
            report.records.len(),
            content_root.display()
        );
        Ok(0)
    } else {
        eprintln!(
            "{} of {} record file(s) failed",
            report.failures.len(),
            report.discovered
        );
        Ok(1)
    }
}
