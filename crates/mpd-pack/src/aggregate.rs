//! # Aggregation
//!
//! Orders normalized records newest first and serializes them as the
//! collection artifact:
//!
//! ```json
//! {
//!   "items": [ { "title": "...", "url": "...", ... } ]
//! }
//! ```
//!
//! Ordering is a stable descending sort on the sort key, so records with
//! identical timestamps keep their discovery order.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use mpd_core::{NormalizedRecord, Record, RecordId};
use serde::{Deserialize, Serialize};

use crate::error::BuildError;

/// The collection artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub items: Vec<Record>,
}

impl Collection {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Sort records newest first and strip their sort keys.
pub fn aggregate(mut records: Vec<NormalizedRecord>) -> Collection {
    records.sort_by(|a, b| b.sort_key().cmp(a.sort_key()));
    Collection {
        items: records.into_iter().map(NormalizedRecord::into_record).collect(),
    }
}

/// An id shared by more than one record file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateId {
    pub id: RecordId,
    /// Every file producing this id, in discovery order.
    pub sources: Vec<PathBuf>,
}

/// Find ids derived from more than one file.
pub fn find_duplicate_ids(records: &[NormalizedRecord]) -> Vec<DuplicateId> {
    let mut by_id: BTreeMap<&RecordId, Vec<PathBuf>> = BTreeMap::new();
    for r in records {
        by_id
            .entry(&r.record().id)
            .or_default()
            .push(r.source().to_path_buf());
    }
    by_id
        .into_iter()
        .filter(|(_, sources)| sources.len() > 1)
        .map(|(id, sources)| DuplicateId {
            id: id.clone(),
            sources,
        })
        .collect()
}

/// Render the collection as pretty-printed UTF-8 JSON with a trailing newline.
pub fn render_collection(collection: &Collection) -> Result<String, serde_json::Error> {
    let mut rendered = serde_json::to_string_pretty(collection)?;
    rendered.push('\n');
    Ok(rendered)
}

/// Write the collection to `path`, creating parent directories and
/// replacing any existing file.
pub fn write_artifact(collection: &Collection, path: &Path) -> Result<(), BuildError> {
    let rendered = render_collection(collection)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| BuildError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(path, rendered).map_err(|source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), items = collection.len(), "wrote collection artifact");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mpd_core::TimeOfDay;

    fn normalized(name: &str, dir: &str, ymd: (i32, u32, u32), time: &str) -> NormalizedRecord {
        let source = PathBuf::from(format!("content/{dir}/{name}.mpd"));
        let record = Record {
            title: name.to_uppercase(),
            url: format!("https://example.org/{name}"),
            year: ymd.0,
            month: ymd.1,
            date: ymd.2,
            time: TimeOfDay::parse(time).unwrap(),
            tags: Vec::new(),
            id: RecordId::from_path(&source).unwrap(),
            extra: BTreeMap::new(),
        };
        NormalizedRecord::new(record, source)
    }

    fn titles(c: &Collection) -> Vec<&str> {
        c.items.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn newest_first() {
        let c = aggregate(vec![
            normalized("a", "p", (2023, 1, 1), "10:00:00"),
            normalized("b", "p", (2024, 1, 1), "10:00:00"),
        ]);
        assert_eq!(titles(&c), ["B", "A"]);
    }

    #[test]
    fn time_of_day_breaks_same_day() {
        let c = aggregate(vec![
            normalized("morning", "p", (2024, 5, 5), "08:00:00"),
            normalized("evening", "p", (2024, 5, 5), "20:00:00"),
            normalized("noon", "p", (2024, 5, 5), "12:00:00"),
        ]);
        assert_eq!(titles(&c), ["EVENING", "NOON", "MORNING"]);
    }

    #[test]
    fn ties_keep_discovery_order() {
        let c = aggregate(vec![
            normalized("first", "p", (2024, 1, 1), "00:00:00"),
            normalized("newer", "p", (2025, 1, 1), "00:00:00"),
            normalized("second", "p", (2024, 1, 1), "00:00:00"),
            normalized("third", "p", (2024, 1, 1), "00:00:00"),
        ]);
        assert_eq!(titles(&c), ["NEWER", "FIRST", "SECOND", "THIRD"]);
    }

    #[test]
    fn empty_input_gives_empty_collection() {
        let c = aggregate(Vec::new());
        assert!(c.is_empty());
        assert_eq!(render_collection(&c).unwrap(), "{\n  \"items\": []\n}\n");
    }

    #[test]
    fn rendered_items_have_no_sort_key_and_keep_unicode() {
        let mut n = normalized("a", "p", (2023, 1, 1), "10:00:00").into_record();
        n.title = "Grüße 🌍".to_string();
        let c = Collection { items: vec![n] };
        let text = render_collection(&c).unwrap();
        assert!(text.contains("Grüße 🌍"), "{text}");
        assert!(!text.contains("sort_key"));
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn duplicate_ids_are_found_across_directories() {
        let records = vec![
            normalized("same", "a", (2024, 1, 1), "00:00:00"),
            normalized("other", "a", (2024, 1, 1), "00:00:00"),
            normalized("same", "b", (2024, 1, 1), "00:00:00"),
        ];
        let dups = find_duplicate_ids(&records);
        assert_eq!(dups.len(), 1);
        assert_eq!(dups[0].id.as_str(), "same");
        assert_eq!(
            dups[0].sources,
            [PathBuf::from("content/a/same.mpd"), PathBuf::from("content/b/same.mpd")]
        );
    }

    #[test]
    fn unique_ids_have_no_duplicates() {
        let records = vec![
            normalized("one", "a", (2024, 1, 1), "00:00:00"),
            normalized("two", "a", (2024, 1, 1), "00:00:00"),
        ];
        assert!(find_duplicate_ids(&records).is_empty());
    }

    #[test]
    fn write_creates_directories_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("nested").join("items.json");

        let first = aggregate(vec![normalized("a", "p", (2023, 1, 1), "10:00:00")]);
        write_artifact(&first, &path).unwrap();
        let second = aggregate(Vec::new());
        write_artifact(&second, &path).unwrap();

        let on_disk: Collection =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk, second);
    }

    #[test]
    fn write_into_a_file_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("data");
        std::fs::write(&blocker, "not a directory").unwrap();
        let err = write_artifact(&aggregate(Vec::new()), &blocker.join("items.json")).unwrap_err();
        assert!(matches!(err, BuildError::Write { .. }), "{err}");
    }

    proptest::proptest! {
        #[test]
        fn output_is_descending_and_stable(
            stamps in proptest::collection::vec((2000i32..2003, 1u32..3, 1u32..3, 0u32..2), 0..24)
        ) {
            let records: Vec<NormalizedRecord> = stamps
                .iter()
                .enumerate()
                .map(|(i, (y, m, d, h))| {
                    normalized(&format!("r{i}"), "p", (*y, *m, *d), &format!("{h:02}:00:00"))
                })
                .collect();
            let keys: Vec<String> = records.iter().map(|r| r.sort_key().to_string()).collect();
            let c = aggregate(records);

            let out: Vec<(String, usize)> = c
                .items
                .iter()
                .map(|r| {
                    let i: usize = r.id.as_str()[1..].parse().unwrap();
                    (keys[i].clone(), i)
                })
                .collect();
            for w in out.windows(2) {
                proptest::prop_assert!(w[0].0 >= w[1].0);
                if w[0].0 == w[1].0 {
                    proptest::prop_assert!(w[0].1 < w[1].1);
                }
            }
            proptest::prop_assert_eq!(out.len(), keys.len());
        }
    }
}
