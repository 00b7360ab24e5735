// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::aggregate::AggregatedSet;
use crate::criteria::{DateSelection, HolidayCriteria};
use roj_domain::HolidayRecord;

/// Keeps the records of `set` that satisfy `criteria`.
///
/// Range selections come back sorted ascending by date; the sort is
/// stable, so records sharing a date keep their aggregation order. Other
/// selections preserve aggregation order.
#[must_use]
pub fn filter(set: AggregatedSet, criteria: &HolidayCriteria) -> Vec<HolidayRecord> {
    let mut records: Vec<HolidayRecord> = set
        .into_iter()
        .filter(|record| criteria.matches(record))
        .collect();

    if matches!(criteria.selection, DateSelection::Range(_)) {
        records.sort_by_key(HolidayRecord::date);
    }
    records
}
