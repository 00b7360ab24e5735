// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Holiday records.
//!
//! A record is immutable once built. Its Kurdish date is derived from
//! the Gregorian date at construction and is never taken from input.

use crate::calendar::{KurdishDate, gregorian_to_kurdish};
use crate::error::DomainError;
use crate::types::{HolidayType, Language, LocalizedText, Region};
use time::Date;

/// A single calendar event in a holiday collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayRecord {
    date: Date,
    kurdish_date: KurdishDate,
    is_holiday: bool,
    event: LocalizedText,
    note: LocalizedText,
    region: Region,
    holiday_type: Option<HolidayType>,
    image: Option<String>,
}

impl HolidayRecord {
    /// Creates a new `HolidayRecord`.
    ///
    /// # Arguments
    ///
    /// * `date` - The Gregorian date of the event
    /// * `is_holiday` - Whether the day is a public holiday
    /// * `event` - The event title, required in every language
    /// * `note` - Optional notes; empty text means no note in that language
    /// * `region` - Where the event is observed
    ///
    /// # Errors
    ///
    /// Returns `MissingTranslation` if `event` has empty text for any language.
    pub fn new(
        date: Date,
        is_holiday: bool,
        event: LocalizedText,
        note: LocalizedText,
        region: Region,
    ) -> Result<Self, DomainError> {
        if let Some(language) = event.first_missing() {
            return Err(DomainError::MissingTranslation { date, language });
        }

        Ok(Self {
            date,
            kurdish_date: gregorian_to_kurdish(date),
            is_holiday,
            event,
            note,
            region,
            holiday_type: None,
            image: None,
        })
    }

    /// Sets the event classification.
    #[must_use]
    pub const fn with_type(mut self, holiday_type: Option<HolidayType>) -> Self {
        self.holiday_type = holiday_type;
        self
    }

    /// Sets the image URL or path.
    #[must_use]
    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    #[must_use]
    pub const fn kurdish_date(&self) -> KurdishDate {
        self.kurdish_date
    }

    #[must_use]
    pub const fn is_holiday(&self) -> bool {
        self.is_holiday
    }

    #[must_use]
    pub const fn event(&self) -> &LocalizedText {
        &self.event
    }

    #[must_use]
    pub const fn note(&self) -> &LocalizedText {
        &self.note
    }

    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    #[must_use]
    pub const fn holiday_type(&self) -> Option<HolidayType> {
        self.holiday_type
    }

    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Returns the event title in `language`.
    #[must_use]
    pub fn event_in(&self, language: Language) -> &str {
        self.event.get(language)
    }

    /// Returns the note in `language`, or `None` when there is none.
    #[must_use]
    pub fn note_in(&self, language: Language) -> Option<&str> {
        self.note.non_empty(language)
    }

    /// Returns the identity used to suppress duplicates across collections.
    #[must_use]
    pub const fn key(&self) -> HolidayKey {
        HolidayKey {
            date: self.date,
            holiday_type: self.holiday_type,
            region: self.region,
        }
    }
}

/// Identity of a holiday across collections.
///
/// Two records with the same date, type, and region describe the same
/// event regardless of their text. A record without a type only collides
/// with other untyped records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HolidayKey {
    /// The Gregorian date.
    pub date: Date,
    /// The event classification, if any.
    pub holiday_type: Option<HolidayType>,
    /// The region.
    pub region: Region,
}
