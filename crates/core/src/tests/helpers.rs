// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roj_domain::{HolidayRecord, HolidayType, Language, LocalizedText, Region};
use roj_store::{HolidayProvider, HolidaySource, InMemoryHolidayStore, SourceKey, StoreError};
use time::Date;

pub fn create_test_event(title: &str) -> LocalizedText {
    LocalizedText::new(
        String::from(title),
        format!("{title} (ku)"),
        format!("{title} (ar)"),
        format!("{title} (fa)"),
    )
}

pub fn create_test_record(date: Date, region: Region) -> HolidayRecord {
    HolidayRecord::new(
        date,
        true,
        create_test_event("Event"),
        LocalizedText::default(),
        region,
    )
    .unwrap()
}

pub fn create_typed_record(
    date: Date,
    region: Region,
    holiday_type: HolidayType,
    note: &str,
) -> HolidayRecord {
    HolidayRecord::new(
        date,
        true,
        create_test_event("Event"),
        LocalizedText::default().with(Language::En, note),
        region,
    )
    .unwrap()
    .with_type(Some(holiday_type))
}

/// Wraps an in-memory store and reports chosen keys as malformed.
pub struct PartlyMalformedProvider {
    pub inner: InMemoryHolidayStore,
    pub malformed: Vec<SourceKey>,
}

impl HolidayProvider for PartlyMalformedProvider {
    fn fetch(&self, key: SourceKey) -> Result<HolidaySource, StoreError> {
        if self.malformed.contains(&key) {
            return Err(StoreError::MalformedSource {
                key,
                reason: String::from("holiday 0: Invalid region: kurdistan"),
            });
        }
        self.inner.fetch(key)
    }

    fn available_years(&self) -> Result<Vec<i32>, StoreError> {
        let mut years: Vec<i32> = self.inner.available_years()?;
        years.extend(self.malformed.iter().filter_map(|key| match key {
            SourceKey::Year(year) => Some(*year),
            SourceKey::Historical => None,
        }));
        years.sort_unstable();
        years.dedup();
        Ok(years)
    }
}

/// A provider whose backing store cannot be read.
pub struct BrokenProvider;

impl HolidayProvider for BrokenProvider {
    fn fetch(&self, _key: SourceKey) -> Result<HolidaySource, StoreError> {
        Err(StoreError::Io {
            location: String::from("data/years"),
            message: String::from("permission denied"),
        })
    }

    fn available_years(&self) -> Result<Vec<i32>, StoreError> {
        Err(StoreError::Io {
            location: String::from("data/years"),
            message: String::from("permission denied"),
        })
    }
}
