//! # Field Rules
//!
//! Each check reads one field from the document, pushes any problem onto a
//! shared [`Violations`] list, and returns the typed value when the field
//! is both present and valid. Checks never short-circuit each other.
//!
//! An optional field is absent only when its key is missing; an explicit
//! `null` is checked like any other value and fails its type rule. A
//! required field whose value is `null` is reported as missing.

use std::ops::RangeInclusive;

use mpd_core::{TimeOfDay, Violations};
use serde_json::{Map, Value};

use crate::document::describe;

/// URL prefixes a record's `url` may start with.
pub const ACCEPTED_URL_SCHEMES: [&str; 2] = ["http://", "https://"];

pub const YEAR_RANGE: RangeInclusive<i64> = 1900..=2100;
pub const MONTH_RANGE: RangeInclusive<i64> = 1..=12;
/// Day of month. No per-month calendar check beyond this range.
pub const DATE_RANGE: RangeInclusive<i64> = 1..=31;

/// Fields with dedicated rules.
pub const KNOWN_FIELDS: [&str; 7] = ["title", "url", "year", "month", "date", "time", "tags"];

/// Fields the build derives itself; author-supplied values are dropped.
pub const RESERVED_FIELDS: [&str; 2] = ["id", "sort_key"];

/// Typed view of the known fields that passed their checks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckedFields {
    pub title: Option<String>,
    pub url: Option<String>,
    pub year: Option<i64>,
    pub month: Option<i64>,
    pub date: Option<i64>,
    pub time: Option<TimeOfDay>,
    pub tags: Option<Vec<String>>,
}

/// Run every field rule against `doc`, accumulating violations.
pub fn check_fields(doc: &Map<String, Value>, violations: &mut Violations) -> CheckedFields {
    let title = required_string(doc, "title", violations);
    let url = required_string(doc, "url", violations).and_then(|url| {
        if ACCEPTED_URL_SCHEMES.iter().any(|s| url.starts_with(s)) {
            Some(url)
        } else {
            violations.push(
                "url",
                format!("{url:?} must start with {}", ACCEPTED_URL_SCHEMES.join(" or ")),
            );
            None
        }
    });

    CheckedFields {
        title,
        url,
        year: bounded_integer(doc, "year", YEAR_RANGE, violations),
        month: bounded_integer(doc, "month", MONTH_RANGE, violations),
        date: bounded_integer(doc, "date", DATE_RANGE, violations),
        time: time_of_day(doc, "time", violations),
        tags: string_sequence(doc, "tags", violations),
    }
}

fn non_null<'a>(doc: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    doc.get(field).filter(|v| !v.is_null())
}

fn required_string(
    doc: &Map<String, Value>,
    field: &str,
    violations: &mut Violations,
) -> Option<String> {
    match non_null(doc, field) {
        None => {
            violations.push(field, "required field is missing");
            None
        }
        Some(Value::String(s)) if s.is_empty() => {
            violations.push(field, "required field is empty");
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            violations.push(field, format!("expected a string, got {}", describe(other)));
            None
        }
    }
}

fn bounded_integer(
    doc: &Map<String, Value>,
    field: &str,
    range: RangeInclusive<i64>,
    violations: &mut Violations,
) -> Option<i64> {
    let value = doc.get(field)?;
    let out_of_range = |shown: &dyn std::fmt::Display| {
        format!("{shown} is out of range {}..={}", range.start(), range.end())
    };

    match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) if range.contains(&i) => Some(i),
            Some(i) => {
                violations.push(field, out_of_range(&i));
                None
            }
            None if n.is_u64() => {
                violations.push(field, out_of_range(n));
                None
            }
            None => {
                violations.push(field, format!("expected an integer, got {}", describe(value)));
                None
            }
        },
        other => {
            violations.push(field, format!("expected an integer, got {}", describe(other)));
            None
        }
    }
}

fn time_of_day(
    doc: &Map<String, Value>,
    field: &str,
    violations: &mut Violations,
) -> Option<TimeOfDay> {
    match doc.get(field)? {
        Value::String(s) => match TimeOfDay::parse(s) {
            Ok(t) => Some(t),
            Err(e) => {
                violations.push(field, e.to_string());
                None
            }
        },
        other => {
            violations.push(
                field,
                format!("expected an HH:MM:SS string, got {}", describe(other)),
            );
            None
        }
    }
}

fn string_sequence(
    doc: &Map<String, Value>,
    field: &str,
    violations: &mut Violations,
) -> Option<Vec<String>> {
    let items = match doc.get(field)? {
        Value::Array(items) => items,
        other => {
            violations.push(
                field,
                format!("expected a sequence of strings, got {}", describe(other)),
            );
            return None;
        }
    };

    let mut strings = Vec::with_capacity(items.len());
    let mut all_strings = true;
    for (i, item) in items.iter().enumerate() {
        match item {
            Value::String(s) => strings.push(s.clone()),
            other => {
                all_strings = false;
                violations.push(
                    format!("{field}[{i}]"),
                    format!("expected a string, got {}", describe(other)),
                );
            }
        }
    }
    all_strings.then_some(strings)
}
