//! Integration test: validate record files on disk with a fixed clock.
//!
//! Writes a small content tree into a temporary directory and checks that
//! each file is accepted or rejected with the right error kind, and that
//! accepted files normalize the same way on every run.

use std::path::{Path, PathBuf};

use mpd_core::{FixedClock, RecordError};
use mpd_schema::RecordValidator;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}

fn validator() -> RecordValidator<FixedClock> {
    RecordValidator::with_clock(FixedClock::from_ymd_hms(2024, 12, 24, 18, 30, 0).unwrap())
}

#[test]
fn accepted_and_rejected_files_are_classified() {
    let dir = tempfile::tempdir().unwrap();
    let good = write(
        dir.path(),
        "posts/good.mpd",
        "title: Good\nurl: https://example.org/good\ntags: [a]\n",
    );
    let unparsable = write(dir.path(), "posts/broken.mpd", "title: \"unterminated\n");
    let invalid = write(
        dir.path(),
        "notes/invalid.mpd",
        "title: ''\nurl: gopher://old\nmonth: 13\n",
    );

    let v = validator();
    assert!(v.validate_file(&good).is_ok());

    let err = v.validate_file(&unparsable).unwrap_err();
    assert!(matches!(err, RecordError::Parse { .. }), "{err}");
    assert!(err.path().ends_with("broken.mpd"));

    match v.validate_file(&invalid).unwrap_err() {
        RecordError::Validation { violations, path } => {
            assert!(path.ends_with("invalid.mpd"));
            assert_eq!(violations.len(), 3, "{violations}");
            assert!(violations.mentions("title"));
            assert!(violations.mentions("url"));
            assert!(violations.mentions("month"));
        }
        other => panic!("expected Validation, got: {other}"),
    }
}

#[test]
fn multibyte_content_is_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "日本語.mpd",
        "title: こんにちは世界\nurl: https://example.jp\ntags: [日本, ñandú]\n",
    );
    let n = validator().validate_file(&path).unwrap();
    assert_eq!(n.record().title, "こんにちは世界");
    assert_eq!(n.record().tags, ["日本", "ñandú"]);
    assert_eq!(n.record().id.as_str(), "日本語");
}

#[test]
fn fixed_clock_normalization_is_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "undated.mpd", "title: U\nurl: http://u\n");

    let first = validator().validate_file(&path).unwrap();
    let second = validator().validate_file(&path).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.sort_key().as_str(), "2024-12-24T18:30:00");
}
