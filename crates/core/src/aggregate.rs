// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Merging loaded collections into one duplicate-free sequence.
//!
//! Records are visited in source order and, within a source, in stored
//! order. The first record seen for a [`HolidayKey`] is kept; later
//! records with the same key are dropped even when their text differs.
//! Reordering the sources can therefore change which text survives.

use roj_domain::{HolidayKey, HolidayRecord};
use roj_store::HolidaySource;
use std::collections::HashSet;
use tracing::debug;

/// Records merged from one or more collections, without duplicates.
///
/// Built and consumed within a single query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedSet {
    records: Vec<HolidayRecord>,
}

impl AggregatedSet {
    #[must_use]
    pub fn records(&self) -> &[HolidayRecord] {
        &self.records
    }

    #[must_use]
    pub fn into_records(self) -> Vec<HolidayRecord> {
        self.records
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

impl IntoIterator for AggregatedSet {
    type Item = HolidayRecord;
    type IntoIter = std::vec::IntoIter<HolidayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// Merges `sources` in order, keeping the first record for each key.
#[must_use]
pub fn aggregate(sources: &[HolidaySource]) -> AggregatedSet {
    let capacity: usize = sources.iter().map(HolidaySource::len).sum();
    let mut seen: HashSet<HolidayKey> = HashSet::with_capacity(capacity);
    let mut records: Vec<HolidayRecord> = Vec::with_capacity(capacity);

    for source in sources {
        for record in source.records() {
            if seen.insert(record.key()) {
                records.push(record.clone());
            } else {
                debug!(
                    source = %source.key(),
                    date = %record.date(),
                    region = %record.region(),
                    "Dropping duplicate holiday"
                );
            }
        }
    }

    AggregatedSet { records }
}
