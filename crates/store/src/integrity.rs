// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Data-integrity checks for stored collections.
//!
//! Stored Kurdish dates are derived data. A stored value that disagrees
//! with the converter for the same Gregorian date is a defect in the
//! collection; these helpers find such records and rewrite them.

use crate::error::StoreError;
use crate::file::FileHolidayStore;
use crate::schema::{RawHoliday, RawHolidayFile, RawKurdishDate};
use crate::source::SourceKey;
use roj_domain::{KurdishDate, gregorian_to_kurdish, parse_gregorian_date};
use serde_json::Value;
use std::path::PathBuf;
use time::Date;
use tracing::info;

/// What is wrong with one stored record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// The record fails schema validation.
    InvalidRecord(String),
    /// The record has no stored Kurdish date.
    MissingKurdishDate,
    /// The stored Kurdish date disagrees with the converter.
    KurdishDateMismatch {
        /// What the collection holds.
        stored: RawKurdishDate,
        /// What the converter produces.
        expected: RawKurdishDate,
    },
}

/// One problem found in a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrityIssue {
    /// Position of the record in the `holidays` array.
    pub index: usize,
    /// The record's Gregorian date as stored.
    pub date: String,
    pub kind: IssueKind,
}

impl std::fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            IssueKind::InvalidRecord(reason) => {
                write!(f, "holiday {} ({}): {reason}", self.index, self.date)
            }
            IssueKind::MissingKurdishDate => {
                write!(f, "holiday {} ({}): missing kurdish_date", self.index, self.date)
            }
            IssueKind::KurdishDateMismatch { stored, expected } => write!(
                f,
                "holiday {} ({}): stored {} {} {} '{}', expected {} {} {} '{}'",
                self.index,
                self.date,
                stored.year,
                stored.month,
                stored.day,
                stored.full_date,
                expected.year,
                expected.month,
                expected.day,
                expected.full_date
            ),
        }
    }
}

/// Result of checking one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrityReport {
    pub key: SourceKey,
    /// Number of records examined.
    pub records: usize,
    pub issues: Vec<IntegrityIssue>,
}

impl IntegrityReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Returns the Kurdish date the collection should store for `date`.
#[must_use]
pub fn expected_kurdish_date(date: Date) -> RawKurdishDate {
    let kurdish: KurdishDate = gregorian_to_kurdish(date);
    RawKurdishDate {
        year: kurdish.year(),
        month: kurdish.month().name().to_string(),
        day: kurdish.day(),
        full_date: kurdish.full_date(),
    }
}

/// Checks every record of a collection document.
///
/// Unlike loading, checking does not stop at the first bad record.
///
/// # Errors
///
/// Returns `MalformedSource` if the document itself cannot be parsed.
pub fn check_collection(key: SourceKey, bytes: &[u8]) -> Result<IntegrityReport, StoreError> {
    let file: RawHolidayFile =
        serde_json::from_slice(bytes).map_err(|e| StoreError::malformed(key, e.to_string()))?;

    let issues: Vec<IntegrityIssue> = file
        .holidays
        .iter()
        .enumerate()
        .filter_map(|(index, raw)| check_record(index, raw))
        .collect();

    Ok(IntegrityReport {
        key,
        records: file.holidays.len(),
        issues,
    })
}

fn check_record(index: usize, raw: &RawHoliday) -> Option<IntegrityIssue> {
    let issue = |kind: IssueKind| IntegrityIssue {
        index,
        date: raw.date.clone(),
        kind,
    };

    if let Err(reason) = raw.to_record() {
        return Some(issue(IssueKind::InvalidRecord(reason)));
    }
    let date: Date = parse_gregorian_date(&raw.date).ok()?;
    let expected: RawKurdishDate = expected_kurdish_date(date);

    match &raw.kurdish_date {
        None => Some(issue(IssueKind::MissingKurdishDate)),
        Some(stored) if *stored != expected => Some(issue(IssueKind::KurdishDateMismatch {
            stored: stored.clone(),
            expected,
        })),
        Some(_) => None,
    }
}

/// Rewrites every stored Kurdish date in a collection document to the
/// converter's value. Other fields are carried over unchanged.
///
/// Returns the new document and the number of records changed.
///
/// # Errors
///
/// Returns `MalformedSource` if the document is not a `holidays` array of
/// objects with valid `date` fields.
pub fn rewrite_kurdish_dates(key: SourceKey, bytes: &[u8]) -> Result<(String, usize), StoreError> {
    let mut document: Value =
        serde_json::from_slice(bytes).map_err(|e| StoreError::malformed(key, e.to_string()))?;
    let holidays: &mut Vec<Value> = document
        .get_mut("holidays")
        .and_then(Value::as_array_mut)
        .ok_or_else(|| StoreError::malformed(key, "missing 'holidays' array"))?;

    let mut changed: usize = 0;
    for (index, holiday) in holidays.iter_mut().enumerate() {
        let object = holiday
            .as_object_mut()
            .ok_or_else(|| StoreError::malformed(key, format!("holiday {index}: not an object")))?;
        let date: Date = object
            .get("date")
            .and_then(Value::as_str)
            .ok_or_else(|| StoreError::malformed(key, format!("holiday {index}: missing 'date'")))
            .and_then(|value| {
                parse_gregorian_date(value)
                    .map_err(|e| StoreError::malformed(key, format!("holiday {index}: {e}")))
            })?;

        let expected: Value = serde_json::to_value(expected_kurdish_date(date))
            .map_err(|e| StoreError::malformed(key, e.to_string()))?;
        if object.get("kurdish_date") != Some(&expected) {
            object.insert(String::from("kurdish_date"), expected);
            changed += 1;
        }
    }

    let mut output: String = serde_json::to_string_pretty(&document)
        .map_err(|e| StoreError::malformed(key, e.to_string()))?;
    output.push('\n');
    Ok((output, changed))
}

impl FileHolidayStore {
    /// Checks the collection file for `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is absent, unreadable, or not a
    /// collection document.
    pub fn check(&self, key: SourceKey) -> Result<IntegrityReport, StoreError> {
        let bytes: Vec<u8> = self.read_raw(key)?;
        check_collection(key, &bytes)
    }

    /// Rewrites the stored Kurdish dates of the collection file for `key`.
    ///
    /// With `dry_run` the file is left untouched. Returns the number of
    /// records that were (or would be) changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or written.
    pub fn update_kurdish_dates(&self, key: SourceKey, dry_run: bool) -> Result<usize, StoreError> {
        let bytes: Vec<u8> = self.read_raw(key)?;
        let (output, changed): (String, usize) = rewrite_kurdish_dates(key, &bytes)?;

        if changed > 0 && !dry_run {
            let path: PathBuf = self.path_for(key);
            std::fs::write(&path, output).map_err(|e| StoreError::io(path.display(), &e))?;
            info!(source = %key, changed, "Rewrote stored Kurdish dates");
        }
        Ok(changed)
    }
}
