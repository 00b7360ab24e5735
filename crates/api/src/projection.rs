// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::request_response::{HolidayResponse, KurdishDateInfo};
use roj_domain::{HolidayRecord, KurdishDate, Language, format_gregorian_date};

impl From<KurdishDate> for KurdishDateInfo {
    fn from(date: KurdishDate) -> Self {
        Self {
            year: date.year(),
            month: date.month().name().to_string(),
            day: date.day(),
            full_date: date.full_date(),
        }
    }
}

/// Projects a record to the single-language output shape.
#[must_use]
pub fn project(record: &HolidayRecord, language: Language) -> HolidayResponse {
    HolidayResponse {
        date: format_gregorian_date(record.date()),
        kurdish_date: KurdishDateInfo::from(record.kurdish_date()),
        is_holiday: record.is_holiday(),
        event: record.event_in(language).to_string(),
        note: record.note_in(language).map(str::to_string),
        region: record.region().as_str().to_string(),
        holiday_type: record
            .holiday_type()
            .map(|kind| kind.as_str().to_string()),
        image: record.image().map(str::to_string),
    }
}

/// Projects every record, keeping order.
#[must_use]
pub fn project_all(records: &[HolidayRecord], language: Language) -> Vec<HolidayResponse> {
    records
        .iter()
        .map(|record| project(record, language))
        .collect()
}
