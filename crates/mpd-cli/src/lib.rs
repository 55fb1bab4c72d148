//! # mpd-cli: CLI for the mpd Content Build
//!
//! Provides the `mpd` command-line interface.
//!
//! ## Subcommands
//!
//! - `mpd build` (also the default when no subcommand is given): validate
//!   every record under the content root (`item/` by default) and write
//!   `data/items.json`.
//! - `mpd check`: validate only; never writes the artifact.
//!
//! ## Output Contract
//!
//! - One `FAIL:` line on stderr per rejected file, naming its path.
//! - One `OK:` summary line on stdout on success, with the record count.
//! - Exit code 0 on success, 1 if any file failed or the artifact could not
//!   be written.
//!
//! ```bash
//! mpd
//! mpd check --content-root site/content
//! mpd build --output public/data/items.json -v
//! ```

pub mod build;
pub mod check;

use mpd_pack::FileFailure;

/// The diagnostic line printed for one rejected file.
pub fn failure_line(failure: &FileFailure) -> String {
    format!("FAIL: {}", failure.error)
}

/// Print one diagnostic line per rejected file to stderr.
pub fn report_failures(failures: &[FileFailure]) {
    for failure in failures {
        eprintln!("{}", failure_line(failure));
    }
}
