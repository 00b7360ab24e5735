// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use roj_domain::{HolidayRecord, HolidayType, Region};
use time::{Date, Month};

/// An inclusive range of Gregorian dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    from: Date,
    to: Date,
}

impl DateRange {
    /// Creates a new `DateRange`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` if `from` is after `to`. A single-day range
    /// (`from == to`) is valid.
    pub fn new(from: Date, to: Date) -> Result<Self, CoreError> {
        if from > to {
            return Err(CoreError::InvalidRange { from, to });
        }
        Ok(Self { from, to })
    }

    #[must_use]
    pub const fn from(&self) -> Date {
        self.from
    }

    #[must_use]
    pub const fn to(&self) -> Date {
        self.to
    }

    /// Returns whether `date` lies within the range, ends included.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.from <= date && date <= self.to
    }
}

/// Which dates a query selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateSelection {
    /// No date constraint.
    #[default]
    Any,
    /// A single date.
    Exact(Date),
    /// An inclusive range. Results are sorted by date.
    Range(DateRange),
}

/// The predicates a holiday must satisfy, combined with AND.
///
/// Every predicate is pure over immutable record fields, so the order in
/// which they are checked cannot change the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HolidayCriteria {
    pub selection: DateSelection,
    /// Gregorian year of the record date.
    pub year: Option<i32>,
    pub month: Option<Month>,
    pub day: Option<u8>,
    pub is_holiday: Option<bool>,
    /// Records tagged `all` satisfy every region.
    pub region: Option<Region>,
    /// Records without a type never satisfy a type constraint.
    pub holiday_type: Option<HolidayType>,
}

impl HolidayCriteria {
    /// Criteria matching every record.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_selection(mut self, selection: DateSelection) -> Self {
        self.selection = selection;
        self
    }

    #[must_use]
    pub const fn with_year(mut self, year: Option<i32>) -> Self {
        self.year = year;
        self
    }

    #[must_use]
    pub const fn with_month(mut self, month: Option<Month>) -> Self {
        self.month = month;
        self
    }

    #[must_use]
    pub const fn with_day(mut self, day: Option<u8>) -> Self {
        self.day = day;
        self
    }

    #[must_use]
    pub const fn with_is_holiday(mut self, is_holiday: Option<bool>) -> Self {
        self.is_holiday = is_holiday;
        self
    }

    #[must_use]
    pub const fn with_region(mut self, region: Option<Region>) -> Self {
        self.region = region;
        self
    }

    #[must_use]
    pub const fn with_type(mut self, holiday_type: Option<HolidayType>) -> Self {
        self.holiday_type = holiday_type;
        self
    }

    /// Returns whether `record` satisfies every predicate.
    #[must_use]
    pub fn matches(&self, record: &HolidayRecord) -> bool {
        let date: Date = record.date();

        let date_ok: bool = match self.selection {
            DateSelection::Any => true,
            DateSelection::Exact(exact) => date == exact,
            DateSelection::Range(range) => range.contains(date),
        };

        date_ok
            && self.year.is_none_or(|year| date.year() == year)
            && self.month.is_none_or(|month| date.month() == month)
            && self.day.is_none_or(|day| date.day() == day)
            && self
                .is_holiday
                .is_none_or(|is_holiday| record.is_holiday() == is_holiday)
            && self
                .region
                .is_none_or(|region| record.region().satisfies(region))
            && self
                .holiday_type
                .is_none_or(|kind| record.holiday_type() == Some(kind))
    }
}
