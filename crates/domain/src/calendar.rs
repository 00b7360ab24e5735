// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Kurdish solar calendar.
//!
//! The Kurdish year begins on Gregorian March 21 (Xakelew 1) and is
//! numbered as the Gregorian year plus [`EPOCH_OFFSET`]. Dates from
//! January 1 to March 20 therefore belong to the Kurdish year that began
//! the previous March.
//!
//! Month lengths are fixed:
//!
//! | # | Month      | Days  | Starts   |
//! |---|------------|-------|----------|
//! | 1 | Xakelew    | 31    | Mar 21   |
//! | 2 | Gullan     | 31    | Apr 21   |
//! | 3 | Cozerdan   | 31    | May 22   |
//! | 4 | Pûşper     | 31    | Jun 22   |
//! | 5 | Gelawêj    | 31    | Jul 23   |
//! | 6 | Xermanan   | 31    | Aug 23   |
//! | 7 | Rezber     | 30    | Sep 23   |
//! | 8 | Gelarêzan  | 30    | Oct 23   |
//! | 9 | Sermawez   | 30    | Nov 22   |
//! | 10| Befranbar  | 30    | Dec 22   |
//! | 11| Rêbendan   | 30    | Jan 21   |
//! | 12| Reşeme     | 29/30 | Feb 20   |
//!
//! Reşeme absorbs the Gregorian leap day: it has 30 days when the
//! February it spans has 29, so Xakelew 1 always falls on March 21 and
//! February 29 is always Reşeme 10.

use crate::error::DomainError;
use crate::types::Language;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, Duration, Month};

/// Difference between a Kurdish year and the Gregorian year in which it begins.
pub const EPOCH_OFFSET: i32 = 700;

/// First Gregorian year for which the conversion rules are verified
/// against published Kurdish calendars. Earlier dates use the same rules
/// proleptically.
pub const VERIFIED_SINCE_YEAR: i32 = 1900;

/// Ordinal of March 20 in a common year; March 21 is one day later.
const DAYS_BEFORE_NEW_YEAR: u16 = 79;

/// A month of the Kurdish solar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum KurdishMonth {
    #[serde(rename = "Xakelew")]
    Xakelew,
    #[serde(rename = "Gullan")]
    Gullan,
    #[serde(rename = "Cozerdan")]
    Cozerdan,
    #[serde(rename = "Pûşper")]
    Pusper,
    #[serde(rename = "Gelawêj")]
    Gelawej,
    #[serde(rename = "Xermanan")]
    Xermanan,
    #[serde(rename = "Rezber")]
    Rezber,
    #[serde(rename = "Gelarêzan")]
    Gelarezan,
    #[serde(rename = "Sermawez")]
    Sermawez,
    #[serde(rename = "Befranbar")]
    Befranbar,
    #[serde(rename = "Rêbendan")]
    Rebendan,
    #[serde(rename = "Reşeme")]
    Reseme,
}

impl KurdishMonth {
    /// All months in calendar order, starting at the new year.
    pub const ALL: [Self; 12] = [
        Self::Xakelew,
        Self::Gullan,
        Self::Cozerdan,
        Self::Pusper,
        Self::Gelawej,
        Self::Xermanan,
        Self::Rezber,
        Self::Gelarezan,
        Self::Sermawez,
        Self::Befranbar,
        Self::Rebendan,
        Self::Reseme,
    ];

    /// Returns the month name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Xakelew => "Xakelew",
            Self::Gullan => "Gullan",
            Self::Cozerdan => "Cozerdan",
            Self::Pusper => "Pûşper",
            Self::Gelawej => "Gelawêj",
            Self::Xermanan => "Xermanan",
            Self::Rezber => "Rezber",
            Self::Gelarezan => "Gelarêzan",
            Self::Sermawez => "Sermawez",
            Self::Befranbar => "Befranbar",
            Self::Rebendan => "Rêbendan",
            Self::Reseme => "Reşeme",
        }
    }

    /// Returns the 1-based position of the month in the Kurdish year.
    #[must_use]
    pub const fn number(&self) -> u8 {
        match self {
            Self::Xakelew => 1,
            Self::Gullan => 2,
            Self::Cozerdan => 3,
            Self::Pusper => 4,
            Self::Gelawej => 5,
            Self::Xermanan => 6,
            Self::Rezber => 7,
            Self::Gelarezan => 8,
            Self::Sermawez => 9,
            Self::Befranbar => 10,
            Self::Rebendan => 11,
            Self::Reseme => 12,
        }
    }

    /// Looks up a month by its 1-based number.
    ///
    /// # Errors
    ///
    /// Returns an error if `number` is not between 1 and 12.
    pub fn from_number(number: u8) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|month| month.number() == number)
            .ok_or_else(|| DomainError::InvalidKurdishMonth(number.to_string()))
    }

    /// Returns the number of days in this month of the given Kurdish year.
    #[must_use]
    pub const fn length(&self, kurdish_year: i32) -> u8 {
        match self {
            Self::Xakelew
            | Self::Gullan
            | Self::Cozerdan
            | Self::Pusper
            | Self::Gelawej
            | Self::Xermanan => 31,
            Self::Rezber
            | Self::Gelarezan
            | Self::Sermawez
            | Self::Befranbar
            | Self::Rebendan => 30,
            Self::Reseme => {
                // Reşeme spans the February of the following Gregorian year.
                match kurdish_year.checked_sub(EPOCH_OFFSET - 1) {
                    Some(february_year) if time::util::is_leap_year(february_year) => 30,
                    _ => 29,
                }
            }
        }
    }
}

impl FromStr for KurdishMonth {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|month| month.name() == s)
            .ok_or_else(|| DomainError::InvalidKurdishMonth(s.to_string()))
    }
}

impl std::fmt::Display for KurdishMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A date in the Kurdish solar calendar.
///
/// Values are only produced by [`gregorian_to_kurdish`] or
/// [`KurdishDate::new`], so the day is always within its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KurdishDate {
    year: i32,
    month: KurdishMonth,
    day: u8,
}

impl KurdishDate {
    /// Creates a Kurdish date after checking the day against the month length.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `year` begins outside the Gregorian years `time::Date` can represent
    ///   (`KurdishYearOutOfRange`)
    /// - `day` is zero or exceeds the month length (`InvalidKurdishDay`)
    pub const fn new(year: i32, month: KurdishMonth, day: u8) -> Result<Self, DomainError> {
        if gregorian_start_year(year).is_none() {
            return Err(DomainError::KurdishYearOutOfRange(year));
        }
        let max: u8 = month.length(year);
        if day < 1 || day > max {
            return Err(DomainError::InvalidKurdishDay {
                year,
                month: month.name(),
                day,
                max,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the Kurdish year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the Kurdish month.
    #[must_use]
    pub const fn month(&self) -> KurdishMonth {
        self.month
    }

    /// Returns the 1-based day of the month.
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Renders the date in the Kurdish convention, e.g. `١ی Xakelew ٢٧٢٤`.
    #[must_use]
    pub fn full_date(&self) -> String {
        self.render(Language::Ku)
    }

    /// Renders the date with the numeral system of `language`.
    #[must_use]
    pub fn render(&self, language: Language) -> String {
        let day: String = localize_digits(&self.day.to_string(), language);
        let year: String = localize_digits(&self.year.to_string(), language);
        match language {
            Language::Ku => format!("{day}ی {} {year}", self.month),
            Language::En | Language::Ar | Language::Fa => {
                format!("{day} {} {year}", self.month)
            }
        }
    }
}

impl std::fmt::Display for KurdishDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.day, self.month, self.year)
    }
}

/// Replaces ASCII digits with the digits used by `language`.
#[must_use]
pub fn localize_digits(value: &str, language: Language) -> String {
    let zero: char = match language {
        Language::En => return value.to_string(),
        Language::Ku | Language::Ar => '\u{0660}',
        Language::Fa => '\u{06F0}',
    };
    value
        .chars()
        .map(|c| {
            c.to_digit(10)
                .and_then(|digit| char::from_u32(u32::from(zero) + digit))
                .unwrap_or(c)
        })
        .collect()
}

/// Converts a Gregorian date to the Kurdish calendar.
///
/// Total over every date `time::Date` can represent.
#[must_use]
pub fn gregorian_to_kurdish(date: Date) -> KurdishDate {
    let this_new_year: u16 = new_year_ordinal(date.year());
    let (start_year, mut offset): (i32, u16) = if date.ordinal() >= this_new_year {
        (date.year(), date.ordinal() - this_new_year)
    } else {
        let previous: i32 = date.year() - 1;
        let days_in_previous: u16 = time::util::days_in_year(previous);
        (
            previous,
            days_in_previous - new_year_ordinal(previous) + date.ordinal(),
        )
    };
    let year: i32 = start_year + EPOCH_OFFSET;

    for month in KurdishMonth::ALL {
        let length: u16 = u16::from(month.length(year));
        if offset < length {
            // offset < 31 here, so the narrowing is lossless
            #[allow(clippy::cast_possible_truncation)]
            let day: u8 = (offset + 1) as u8;
            return KurdishDate { year, month, day };
        }
        offset -= length;
    }

    // The twelve months cover every day up to the next March 20.
    KurdishDate {
        year,
        month: KurdishMonth::Reseme,
        day: KurdishMonth::Reseme.length(year),
    }
}

/// Converts a Kurdish date to the Gregorian calendar.
///
/// # Errors
///
/// Returns an error if:
/// - `day` is zero or exceeds the month length in `year`
/// - the resulting Gregorian date cannot be represented
pub fn kurdish_to_gregorian(year: i32, month: KurdishMonth, day: u8) -> Result<Date, DomainError> {
    let kurdish: KurdishDate = KurdishDate::new(year, month, day)?;
    kurdish_date_to_gregorian(kurdish)
}

/// Converts an already validated Kurdish date to the Gregorian calendar.
///
/// # Errors
///
/// Returns an error if the Gregorian date cannot be represented.
pub fn kurdish_date_to_gregorian(kurdish: KurdishDate) -> Result<Date, DomainError> {
    let start_year: i32 = gregorian_start_year(kurdish.year)
        .ok_or(DomainError::KurdishYearOutOfRange(kurdish.year))?;
    let new_year: Date = Date::from_calendar_date(start_year, Month::March, 21)
        .map_err(|_| DomainError::KurdishYearOutOfRange(kurdish.year))?;

    let days_before_month: i64 = KurdishMonth::ALL
        .iter()
        .take_while(|month| **month != kurdish.month)
        .map(|month| i64::from(month.length(kurdish.year)))
        .sum();
    let offset: i64 = days_before_month + i64::from(kurdish.day) - 1;

    new_year
        .checked_add(Duration::days(offset))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("converting {kurdish} to a Gregorian date"),
        })
}

/// Returns whether `day` is a valid day of `month` in Kurdish `year`.
#[must_use]
pub fn is_valid_kurdish_date(year: i32, month: KurdishMonth, day: u8) -> bool {
    KurdishDate::new(year, month, day).is_ok()
}

/// Returns whether conversions for this Gregorian date fall inside the
/// verified range. Earlier dates are converted with the same rules but
/// should be presented as approximate.
#[must_use]
pub const fn is_verified_conversion(date: Date) -> bool {
    date.year() >= VERIFIED_SINCE_YEAR
}

/// Gregorian year in which Kurdish `year` begins, if `time::Date` can
/// represent it.
const fn gregorian_start_year(year: i32) -> Option<i32> {
    match year.checked_sub(EPOCH_OFFSET) {
        Some(start) if start >= Date::MIN.year() && start <= Date::MAX.year() => Some(start),
        _ => None,
    }
}

/// Ordinal of March 21 in the given Gregorian year.
const fn new_year_ordinal(year: i32) -> u16 {
    if time::util::is_leap_year(year) {
        DAYS_BEFORE_NEW_YEAR + 2
    } else {
        DAYS_BEFORE_NEW_YEAR + 1
    }
}
