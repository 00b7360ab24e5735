// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_record, create_typed_record};
use crate::{CoreError, DateRange, DateSelection, HolidayCriteria};
use roj_domain::{HolidayRecord, HolidayType, Region};
use time::Month;
use time::macros::date;

const CONCRETE_REGIONS: [Region; 4] = [
    Region::Bashur,
    Region::Bakur,
    Region::Rojhelat,
    Region::Rojava,
];

#[test]
fn test_range_rejects_reversed_bounds() {
    let result: Result<DateRange, CoreError> =
        DateRange::new(date!(2025 - 12 - 31), date!(2025 - 01 - 01));

    assert_eq!(
        result.unwrap_err(),
        CoreError::InvalidRange {
            from: date!(2025 - 12 - 31),
            to: date!(2025 - 01 - 01),
        }
    );
}

#[test]
fn test_range_is_inclusive() {
    let range: DateRange = DateRange::new(date!(2025 - 01 - 01), date!(2025 - 12 - 31)).unwrap();

    assert!(range.contains(date!(2025 - 01 - 01)));
    assert!(range.contains(date!(2025 - 12 - 31)));
    assert!(!range.contains(date!(2024 - 12 - 31)));
    assert!(!range.contains(date!(2026 - 01 - 01)));
    assert!(DateRange::new(date!(2025 - 03 - 21), date!(2025 - 03 - 21)).is_ok());
}

#[test]
fn test_all_region_matches_every_requested_region() {
    let record: HolidayRecord = create_test_record(date!(2025 - 03 - 21), Region::All);

    for region in CONCRETE_REGIONS {
        let criteria: HolidayCriteria = HolidayCriteria::any().with_region(Some(region));
        assert!(criteria.matches(&record), "{region} should match 'all'");
    }
}

#[test]
fn test_concrete_region_does_not_match_other_regions() {
    let record: HolidayRecord = create_test_record(date!(2025 - 10 - 17), Region::Bashur);

    assert!(!HolidayCriteria::any()
        .with_region(Some(Region::Bakur))
        .matches(&record));
    assert!(HolidayCriteria::any()
        .with_region(Some(Region::Bashur))
        .matches(&record));
    assert!(!HolidayCriteria::any()
        .with_region(Some(Region::All))
        .matches(&record));
}

#[test]
fn test_untyped_record_never_matches_type_filter() {
    let untyped: HolidayRecord = create_test_record(date!(2025 - 03 - 21), Region::All);
    let typed: HolidayRecord = create_typed_record(
        date!(2025 - 03 - 21),
        Region::All,
        HolidayType::Cultural,
        "",
    );
    let criteria: HolidayCriteria = HolidayCriteria::any().with_type(Some(HolidayType::Cultural));

    assert!(!criteria.matches(&untyped));
    assert!(criteria.matches(&typed));
    assert!(
        !HolidayCriteria::any()
            .with_type(Some(HolidayType::Religious))
            .matches(&typed)
    );
}

#[test]
fn test_month_day_and_status_predicates() {
    let record: HolidayRecord = create_test_record(date!(2025 - 03 - 21), Region::All);

    assert!(
        HolidayCriteria::any()
            .with_month(Some(Month::March))
            .with_day(Some(21))
            .with_is_holiday(Some(true))
            .matches(&record)
    );
    assert!(
        !HolidayCriteria::any()
            .with_month(Some(Month::April))
            .matches(&record)
    );
    assert!(!HolidayCriteria::any().with_day(Some(20)).matches(&record));
    assert!(
        !HolidayCriteria::any()
            .with_is_holiday(Some(false))
            .matches(&record)
    );
}

#[test]
fn test_year_predicate() {
    let record: HolidayRecord = create_test_record(date!(1946 - 01 - 22), Region::Rojhelat);

    assert!(HolidayCriteria::any().with_year(Some(1946)).matches(&record));
    assert!(!HolidayCriteria::any().with_year(Some(2025)).matches(&record));
}

#[test]
fn test_exact_selection() {
    let record: HolidayRecord = create_test_record(date!(2025 - 03 - 21), Region::All);

    assert!(
        HolidayCriteria::any()
            .with_selection(DateSelection::Exact(date!(2025 - 03 - 21)))
            .matches(&record)
    );
    assert!(
        !HolidayCriteria::any()
            .with_selection(DateSelection::Exact(date!(2026 - 03 - 21)))
            .matches(&record)
    );
}

#[test]
fn test_empty_criteria_match_everything() {
    let record: HolidayRecord = create_test_record(date!(1946 - 01 - 22), Region::Rojhelat);

    assert!(HolidayCriteria::any().matches(&record));
}
