// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! On-disk collection schema.
//!
//! A collection is a JSON document with a single `holidays` array:
//!
//! ```json
//! {
//!   "holidays": [
//!     {
//!       "date": "2025-03-21",
//!       "kurdish_date": { "year": 2725, "month": "Xakelew", "day": 1, "full_date": "١ی Xakelew ٢٧٢٥" },
//!       "isHoliday": true,
//!       "event": { "en": "Newroz", "ku": "نەورۆز", "ar": "نوروز", "fa": "نوروز" },
//!       "note": { "en": "", "ku": "" },
//!       "region": "all",
//!       "type": "cultural",
//!       "image": null
//!     }
//!   ]
//! }
//! ```
//!
//! The stored `kurdish_date` is informational; records always derive it
//! from `date`. See [`crate::integrity`] for checking it.

use crate::error::StoreError;
use crate::source::SourceKey;
use roj_domain::{
    DomainError, HolidayRecord, HolidayType, Language, LocalizedText, Region, parse_gregorian_date,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Date;

/// A whole collection document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawHolidayFile {
    pub holidays: Vec<RawHoliday>,
}

/// One record as stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawHoliday {
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kurdish_date: Option<RawKurdishDate>,
    #[serde(rename = "isHoliday")]
    pub is_holiday: bool,
    pub event: BTreeMap<String, String>,
    #[serde(default)]
    pub note: BTreeMap<String, String>,
    pub region: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub holiday_type: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// A stored Kurdish date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawKurdishDate {
    pub year: i32,
    pub month: String,
    pub day: u8,
    pub full_date: String,
}

impl RawHoliday {
    /// Validates this record and builds the domain value.
    ///
    /// # Errors
    ///
    /// Returns a description of the first schema violation found.
    pub fn to_record(&self) -> Result<HolidayRecord, String> {
        let date: Date = parse_gregorian_date(&self.date).map_err(|e| e.to_string())?;
        let event: LocalizedText = localized(&self.event, "event")?;
        let note: LocalizedText = localized(&self.note, "note")?;
        let region: Region = self
            .region
            .parse()
            .map_err(|e: DomainError| e.to_string())?;
        let holiday_type: Option<HolidayType> = self
            .holiday_type
            .as_deref()
            .map(str::parse)
            .transpose()
            .map_err(|e: DomainError| e.to_string())?;

        let record: HolidayRecord = HolidayRecord::new(date, self.is_holiday, event, note, region)
            .map_err(|e| e.to_string())?
            .with_type(holiday_type)
            .with_image(self.image.clone().filter(|image| !image.is_empty()));
        Ok(record)
    }
}

/// Builds localized text from a language-keyed map.
fn localized(map: &BTreeMap<String, String>, field: &str) -> Result<LocalizedText, String> {
    let mut text: LocalizedText = LocalizedText::default();
    for (code, value) in map {
        let language: Language = code
            .parse()
            .map_err(|_| format!("unknown language '{code}' in {field}"))?;
        text = text.with(language, value.clone());
    }
    Ok(text)
}

/// Parses a collection document into records.
///
/// # Errors
///
/// Returns `MalformedSource` if the document is not valid JSON, lacks the
/// `holidays` array, or any record violates the schema. No record is
/// dropped silently: one bad record rejects the whole collection.
pub fn parse_collection(key: SourceKey, bytes: &[u8]) -> Result<Vec<HolidayRecord>, StoreError> {
    let file: RawHolidayFile =
        serde_json::from_slice(bytes).map_err(|e| StoreError::malformed(key, e.to_string()))?;

    file.holidays
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            raw.to_record()
                .map_err(|reason| StoreError::malformed(key, format!("holiday {index}: {reason}")))
        })
        .collect()
}
