// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roj_domain::HolidayRecord;
use std::sync::Arc;

/// Name of the collection holding events outside the per-year partitioning.
pub const HISTORICAL_SOURCE_NAME: &str = "historical";

/// Address of one holiday collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceKey {
    /// The collection for one Gregorian year.
    Year(i32),
    /// The historical collection.
    Historical,
}

impl SourceKey {
    /// Parses a collection name (`"2025"`, `"historical"`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name == HISTORICAL_SOURCE_NAME {
            return Some(Self::Historical);
        }
        if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        name.parse::<i32>().ok().map(Self::Year)
    }

    /// Returns the collection name.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Year(year) => year.to_string(),
            Self::Historical => HISTORICAL_SOURCE_NAME.to_string(),
        }
    }
}

impl std::fmt::Display for SourceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Year(year) => write!(f, "year {year}"),
            Self::Historical => write!(f, "'{HISTORICAL_SOURCE_NAME}'"),
        }
    }
}

/// Which collections a load covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceSelector {
    /// A single year.
    Year(i32),
    /// The historical collection.
    Historical,
    /// Every year collection. The historical collection is excluded so
    /// its events are not counted twice when it is added explicitly.
    AllYears,
    /// The year collections that exist between two years, inclusive.
    /// Historical is excluded as with `AllYears`.
    YearsBetween { from: i32, to: i32 },
}

/// A loaded, immutable holiday collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidaySource {
    key: SourceKey,
    records: Arc<[HolidayRecord]>,
}

impl HolidaySource {
    /// Creates a source from its key and records.
    #[must_use]
    pub fn new(key: SourceKey, records: impl Into<Arc<[HolidayRecord]>>) -> Self {
        Self {
            key,
            records: records.into(),
        }
    }

    #[must_use]
    pub const fn key(&self) -> SourceKey {
        self.key
    }

    #[must_use]
    pub fn records(&self) -> &[HolidayRecord] {
        &self.records
    }

    /// Returns a cheap shared handle to the records.
    #[must_use]
    pub fn shared_records(&self) -> Arc<[HolidayRecord]> {
        Arc::clone(&self.records)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
