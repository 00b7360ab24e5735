// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::create_test_record;
use crate::{AggregatedSet, DateRange, DateSelection, HolidayCriteria, aggregate, filter};
use roj_domain::{HolidayRecord, Region};
use roj_store::{HolidaySource, SourceKey};
use time::Date;
use time::macros::date;

fn set_of(dates: &[Date]) -> AggregatedSet {
    let records: Vec<HolidayRecord> = dates
        .iter()
        .map(|date| create_test_record(*date, Region::All))
        .collect();
    aggregate(&[HolidaySource::new(SourceKey::Year(2025), records)])
}

fn dates_of(records: &[HolidayRecord]) -> Vec<Date> {
    records.iter().map(HolidayRecord::date).collect()
}

#[test]
fn test_range_returns_inner_dates_sorted() {
    let set: AggregatedSet = set_of(&[
        date!(2026 - 01 - 01),
        date!(2025 - 06 - 15),
        date!(2024 - 12 - 31),
        date!(2025 - 01 - 01),
    ]);
    let range: DateRange = DateRange::new(date!(2025 - 01 - 01), date!(2025 - 12 - 31)).unwrap();

    let records: Vec<HolidayRecord> = filter(
        set,
        &HolidayCriteria::any().with_selection(DateSelection::Range(range)),
    );

    assert_eq!(
        dates_of(&records),
        vec![date!(2025 - 01 - 01), date!(2025 - 06 - 15)]
    );
}

#[test]
fn test_non_range_keeps_aggregation_order() {
    let set: AggregatedSet = set_of(&[
        date!(2025 - 10 - 17),
        date!(2025 - 03 - 21),
        date!(2025 - 05 - 01),
    ]);

    let records: Vec<HolidayRecord> = filter(set, &HolidayCriteria::any());

    assert_eq!(
        dates_of(&records),
        vec![
            date!(2025 - 10 - 17),
            date!(2025 - 03 - 21),
            date!(2025 - 05 - 01)
        ]
    );
}

#[test]
fn test_predicates_combine_with_and() {
    let records: Vec<HolidayRecord> = vec![
        create_test_record(date!(2025 - 03 - 21), Region::All),
        create_test_record(date!(2025 - 03 - 22), Region::Bashur),
        create_test_record(date!(2025 - 03 - 23), Region::Bakur),
        create_test_record(date!(2025 - 04 - 22), Region::Bashur),
    ];
    let set: AggregatedSet = aggregate(&[HolidaySource::new(SourceKey::Year(2025), records)]);

    let matched: Vec<HolidayRecord> = filter(
        set,
        &HolidayCriteria::any()
            .with_month(Some(time::Month::March))
            .with_region(Some(Region::Bashur)),
    );

    assert_eq!(
        dates_of(&matched),
        vec![date!(2025 - 03 - 21), date!(2025 - 03 - 22)]
    );
}
