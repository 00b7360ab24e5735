// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests carry raw strings so that validation errors are reported by
//! this layer with the offending field named.

use serde::{Deserialize, Serialize};

/// Filters accepted by the holiday listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HolidayListRequest {
    /// Restrict to one year's collection.
    pub year: Option<i32>,
    /// Gregorian month, 1 through 12.
    pub month: Option<u8>,
    /// Gregorian day of month, 1 through 31.
    pub day: Option<u8>,
    /// Output language (`en`, `ku`, `ar`, `fa`). Defaults to `en`.
    pub lang: Option<String>,
    pub is_holiday: Option<bool>,
    pub region: Option<String>,
    #[serde(rename = "type")]
    pub holiday_type: Option<String>,
    /// Range start, `YYYY-MM-DD`. Requires `to_date`.
    pub from_date: Option<String>,
    /// Range end, `YYYY-MM-DD`. Requires `from_date`.
    pub to_date: Option<String>,
    /// Also read the historical collection.
    pub include_historical: Option<bool>,
}

/// Filters accepted by the single-date, today, and range queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HolidayFilterRequest {
    pub lang: Option<String>,
    pub region: Option<String>,
    #[serde(rename = "type")]
    pub holiday_type: Option<String>,
    pub is_holiday: Option<bool>,
    pub include_historical: Option<bool>,
}

/// A Kurdish date as rendered in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KurdishDateInfo {
    pub year: i32,
    pub month: String,
    pub day: u8,
    /// Kurdish-locale rendering, e.g. `١ی Xakelew ٢٧٢٥`.
    pub full_date: String,
}

/// One holiday projected to a single language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayResponse {
    pub date: String,
    pub kurdish_date: KurdishDateInfo,
    #[serde(rename = "isHoliday")]
    pub is_holiday: bool,
    pub event: String,
    /// Absent when the note is empty or missing in the requested language.
    pub note: Option<String>,
    pub region: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub holiday_type: Option<String>,
    pub image: Option<String>,
}

/// Request to convert a Gregorian date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GregorianToKurdishRequest {
    /// `YYYY-MM-DD`.
    pub date: String,
}

/// Response for a Gregorian to Kurdish conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GregorianToKurdishResponse {
    pub status: String,
    pub gregorian_date: String,
    pub kurdish_date: KurdishDateInfo,
    /// Set for dates before 1900, where the conversion rules are unverified.
    pub approximate: bool,
}

/// A Kurdish month given either by name or by 1-based number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MonthInput {
    Number(u8),
    Name(String),
}

impl std::fmt::Display for MonthInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}

/// Request to convert a Kurdish date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KurdishToGregorianRequest {
    pub year: i32,
    pub month: MonthInput,
    pub day: u8,
}

/// Response for a Kurdish to Gregorian conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KurdishToGregorianResponse {
    pub status: String,
    pub kurdish_date: KurdishDateInfo,
    pub gregorian_date: String,
    /// Set for results before 1900, where the conversion rules are unverified.
    pub approximate: bool,
}

/// Request to validate a Kurdish date.
pub type ValidateKurdishDateRequest = KurdishToGregorianRequest;

/// A Kurdish date echoed back as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KurdishDateInput {
    pub year: i32,
    pub month: String,
    pub day: u8,
}

/// Response for a Kurdish date validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateKurdishDateResponse {
    pub status: String,
    pub kurdish_date: KurdishDateInput,
    pub is_valid: bool,
}

/// Service description returned at the root path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub documentation: String,
}
