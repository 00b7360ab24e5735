// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::HolidayResponse;
use roj_domain::{HolidayRecord, HolidayType, Language, LocalizedText, Region};
use roj_store::{InMemoryHolidayStore, SourceKey};
use time::Date;
use time::macros::date;

pub fn create_test_record(
    date: Date,
    region: Region,
    holiday_type: Option<HolidayType>,
    title: &str,
) -> HolidayRecord {
    let event: LocalizedText = LocalizedText::new(
        String::from(title),
        format!("{title} ku"),
        format!("{title} ar"),
        format!("{title} fa"),
    );
    HolidayRecord::new(date, true, event, LocalizedText::default(), region)
        .unwrap()
        .with_type(holiday_type)
}

/// Two modern years plus a historical collection that repeats one event.
pub fn create_test_store() -> InMemoryHolidayStore {
    let note: LocalizedText = LocalizedText::default().with(Language::Ku, "text");
    let with_note: HolidayRecord = HolidayRecord::new(
        date!(2025 - 06 - 15),
        false,
        create_test_record(date!(2025 - 06 - 15), Region::All, None, "Midsummer")
            .event()
            .clone(),
        note,
        Region::All,
    )
    .unwrap();

    InMemoryHolidayStore::new()
        .with_source(
            SourceKey::Year(2024),
            vec![create_test_record(
                date!(2024 - 12 - 31),
                Region::All,
                Some(HolidayType::Cultural),
                "Year end",
            )],
        )
        .with_source(
            SourceKey::Year(2025),
            vec![
                create_test_record(
                    date!(2025 - 10 - 17),
                    Region::Bashur,
                    Some(HolidayType::Commemoration),
                    "Commemoration",
                ),
                create_test_record(
                    date!(2025 - 03 - 21),
                    Region::All,
                    Some(HolidayType::Cultural),
                    "Newroz",
                ),
                with_note,
                create_test_record(
                    date!(2025 - 01 - 01),
                    Region::Bakur,
                    Some(HolidayType::Official),
                    "New Year",
                ),
            ],
        )
        .with_source(
            SourceKey::Year(2026),
            vec![create_test_record(
                date!(2026 - 01 - 01),
                Region::All,
                Some(HolidayType::Official),
                "New Year",
            )],
        )
        .with_source(
            SourceKey::Historical,
            vec![
                create_test_record(
                    date!(1946 - 01 - 22),
                    Region::Rojhelat,
                    Some(HolidayType::Historical),
                    "Republic",
                ),
                create_test_record(
                    date!(2025 - 10 - 17),
                    Region::Bashur,
                    Some(HolidayType::Commemoration),
                    "Historical copy",
                ),
            ],
        )
}

pub fn dates_of(responses: &[HolidayResponse]) -> Vec<&str> {
    responses
        .iter()
        .map(|response| response.date.as_str())
        .collect()
}
