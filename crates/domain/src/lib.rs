// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod calendar;
mod dates;
mod error;
mod holiday;
mod types;

#[cfg(test)]
mod tests;

// Re-export public types
pub use calendar::{
    EPOCH_OFFSET, KurdishDate, KurdishMonth, VERIFIED_SINCE_YEAR, gregorian_to_kurdish,
    is_valid_kurdish_date, is_verified_conversion, kurdish_date_to_gregorian,
    kurdish_to_gregorian, localize_digits,
};
pub use dates::{
    date_in_timezone, format_gregorian_date, parse_gregorian_date, parse_timezone, today_in,
};
pub use error::DomainError;
pub use holiday::{HolidayKey, HolidayRecord};
pub use types::{HolidayType, Language, LocalizedText, Region};
