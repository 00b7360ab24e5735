// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Gregorian date parsing and "today" resolution.

use crate::error::DomainError;
use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;
use time::Date;
use time::format_description::FormatItem;

/// The only accepted textual date form.
const DATE_FORMAT: &[FormatItem<'_>] = time::macros::format_description!("[year]-[month]-[day]");

/// Parses a `YYYY-MM-DD` string into a calendar date.
///
/// # Errors
///
/// Returns `InvalidDateFormat` if the string is not a valid calendar date
/// in that form (e.g. `2024-02-30`, `2024-3-1`).
pub fn parse_gregorian_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, DATE_FORMAT).map_err(|_| DomainError::InvalidDateFormat {
        value: value.to_string(),
    })
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_gregorian_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Returns the current calendar date in the named IANA time zone.
///
/// # Errors
///
/// Returns an error if the time zone name is unknown.
pub fn today_in(timezone: &str) -> Result<Date, DomainError> {
    date_in_timezone(Utc::now(), parse_timezone(timezone)?)
}

/// Parses an IANA time zone name such as `Asia/Baghdad`.
///
/// # Errors
///
/// Returns `InvalidTimezone` if the name is unknown.
pub fn parse_timezone(timezone: &str) -> Result<Tz, DomainError> {
    timezone
        .parse()
        .map_err(|_| DomainError::InvalidTimezone(timezone.to_string()))
}

/// Returns the calendar date of `instant` as observed in `tz`.
///
/// # Errors
///
/// Returns an error if the local date cannot be represented.
pub fn date_in_timezone(instant: DateTime<Utc>, tz: Tz) -> Result<Date, DomainError> {
    let local = instant.with_timezone(&tz).date_naive();

    // Convert chrono::NaiveDate to time::Date
    let month: time::Month = u8::try_from(local.month())
        .ok()
        .and_then(|m| time::Month::try_from(m).ok())
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("converting month of {local}"),
        })?;
    let day: u8 = u8::try_from(local.day()).map_err(|_| DomainError::DateArithmeticOverflow {
        operation: format!("converting day of {local}"),
    })?;

    Date::from_calendar_date(local.year(), month, day).map_err(|_| {
        DomainError::DateArithmeticOverflow {
            operation: format!("converting {local} to a calendar date"),
        }
    })
}
