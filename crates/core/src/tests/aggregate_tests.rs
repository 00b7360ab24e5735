// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_record, create_typed_record};
use crate::{AggregatedSet, aggregate};
use roj_domain::{HolidayRecord, HolidayType, Language, Region};
use roj_store::{HolidaySource, SourceKey};
use time::macros::date;

fn note_of(set: &AggregatedSet, index: usize) -> Option<&str> {
    set.records()[index].note_in(Language::En)
}

#[test]
fn test_first_source_wins_duplicates() {
    let source_a: HolidaySource = HolidaySource::new(
        SourceKey::Year(2025),
        vec![create_typed_record(
            date!(2025 - 10 - 17),
            Region::Bashur,
            HolidayType::Commemoration,
            "from A",
        )],
    );
    let source_b: HolidaySource = HolidaySource::new(
        SourceKey::Historical,
        vec![create_typed_record(
            date!(2025 - 10 - 17),
            Region::Bashur,
            HolidayType::Commemoration,
            "from B",
        )],
    );

    let ab: AggregatedSet = aggregate(&[source_a.clone(), source_b.clone()]);
    let ba: AggregatedSet = aggregate(&[source_b, source_a]);

    assert_eq!(ab.len(), 1);
    assert_eq!(note_of(&ab, 0), Some("from A"));
    assert_eq!(ba.len(), 1);
    assert_eq!(note_of(&ba, 0), Some("from B"));
}

#[test]
fn test_duplicates_within_one_source_are_dropped() {
    let source: HolidaySource = HolidaySource::new(
        SourceKey::Year(2025),
        vec![
            create_typed_record(
                date!(2025 - 03 - 21),
                Region::All,
                HolidayType::Cultural,
                "first",
            ),
            create_typed_record(
                date!(2025 - 03 - 21),
                Region::All,
                HolidayType::Cultural,
                "second",
            ),
        ],
    );

    let set: AggregatedSet = aggregate(&[source]);

    assert_eq!(set.len(), 1);
    assert_eq!(note_of(&set, 0), Some("first"));
}

#[test]
fn test_key_distinguishes_type_and_region() {
    let source: HolidaySource = HolidaySource::new(
        SourceKey::Year(2025),
        vec![
            create_typed_record(
                date!(2025 - 03 - 21),
                Region::All,
                HolidayType::Cultural,
                "",
            ),
            create_typed_record(
                date!(2025 - 03 - 21),
                Region::All,
                HolidayType::Official,
                "",
            ),
            create_typed_record(
                date!(2025 - 03 - 21),
                Region::Bashur,
                HolidayType::Cultural,
                "",
            ),
            create_test_record(date!(2025 - 03 - 21), Region::All),
        ],
    );

    assert_eq!(aggregate(&[source]).len(), 4);
}

#[test]
fn test_untyped_records_collide_with_each_other() {
    let source: HolidaySource = HolidaySource::new(
        SourceKey::Year(2025),
        vec![
            create_test_record(date!(2025 - 05 - 01), Region::All),
            create_test_record(date!(2025 - 05 - 01), Region::All),
        ],
    );

    assert_eq!(aggregate(&[source]).len(), 1);
}

#[test]
fn test_aggregation_preserves_source_order() {
    let year: HolidaySource = HolidaySource::new(
        SourceKey::Year(2025),
        vec![
            create_test_record(date!(2025 - 10 - 17), Region::Bashur),
            create_test_record(date!(2025 - 03 - 21), Region::All),
        ],
    );
    let historical: HolidaySource = HolidaySource::new(
        SourceKey::Historical,
        vec![create_test_record(date!(1946 - 01 - 22), Region::Rojhelat)],
    );

    let dates: Vec<time::Date> = aggregate(&[year, historical])
        .into_iter()
        .map(|record: HolidayRecord| record.date())
        .collect();

    assert_eq!(
        dates,
        vec![
            date!(2025 - 10 - 17),
            date!(2025 - 03 - 21),
            date!(1946 - 01 - 22)
        ]
    );
}

#[test]
fn test_no_sources_is_empty() {
    assert!(aggregate(&[]).is_empty());
}
