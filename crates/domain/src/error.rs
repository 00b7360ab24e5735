// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::Language;

/// Errors that can occur while validating or converting domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A Gregorian date string did not parse as `YYYY-MM-DD`.
    InvalidDateFormat {
        /// The rejected input.
        value: String,
    },
    /// A Kurdish month name or number is not one of the twelve months.
    InvalidKurdishMonth(String),
    /// A Kurdish day is outside the bounds of its month.
    InvalidKurdishDay {
        /// The Kurdish year.
        year: i32,
        /// The Kurdish month name.
        month: &'static str,
        /// The rejected day.
        day: u8,
        /// The length of the month in that year.
        max: u8,
    },
    /// A Kurdish year cannot be represented as a Gregorian date.
    KurdishYearOutOfRange(i32),
    /// Region is not one of the recognized regions.
    InvalidRegion(String),
    /// Holiday type is not one of the recognized types.
    InvalidHolidayType(String),
    /// Language code is not one of the supported languages.
    InvalidLanguage(String),
    /// The event text is missing a translation.
    MissingTranslation {
        /// The date of the record being built.
        date: time::Date,
        /// The language whose text is missing or empty.
        language: Language,
    },
    /// Time zone name is not a valid IANA identifier.
    InvalidTimezone(String),
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateFormat { value } => {
                write!(f, "Invalid date format '{value}'. Use YYYY-MM-DD")
            }
            Self::InvalidKurdishMonth(month) => {
                write!(f, "Invalid Kurdish month: {month}")
            }
            Self::InvalidKurdishDay {
                year,
                month,
                day,
                max,
            } => {
                write!(
                    f,
                    "Invalid Kurdish day {day} for {month} {year}. Must be between 1 and {max}"
                )
            }
            Self::KurdishYearOutOfRange(year) => {
                write!(f, "Kurdish year {year} is outside the supported range")
            }
            Self::InvalidRegion(region) => write!(f, "Invalid region: {region}"),
            Self::InvalidHolidayType(kind) => write!(f, "Invalid holiday type: {kind}"),
            Self::InvalidLanguage(lang) => write!(f, "Invalid language: {lang}"),
            Self::MissingTranslation { date, language } => {
                write!(f, "Event on {date} is missing its '{language}' text")
            }
            Self::InvalidTimezone(tz) => write!(f, "Invalid timezone: {tz}"),
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
