// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Choosing which collections a query needs.
//!
//! Year collections always precede the historical collection, so year
//! data wins when the two hold the same event.

use crate::criteria::DateRange;
use roj_store::SourceSelector;
use time::Date;

/// Default first year covered by per-year collections.
pub const DEFAULT_FIRST_MODERN_YEAR: i32 = 2023;

/// Settings that shape source planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryConfig {
    /// First Gregorian year with its own collection. Queries reaching
    /// before it also read the historical collection.
    pub first_modern_year: i32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            first_modern_year: DEFAULT_FIRST_MODERN_YEAR,
        }
    }
}

/// An ordered list of collections to read.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryPlan {
    selectors: Vec<SourceSelector>,
}

impl QueryPlan {
    #[must_use]
    pub fn selectors(&self) -> &[SourceSelector] {
        &self.selectors
    }

    fn push_historical_if(mut self, needed: bool) -> Self {
        if needed {
            self.selectors.push(SourceSelector::Historical);
        }
        self
    }
}

impl QueryConfig {
    const fn is_pre_modern(&self, year: i32) -> bool {
        year < self.first_modern_year
    }

    /// Plans a range query: the existing year collections from
    /// `max(first_modern_year, from.year)` through `to.year`, then the
    /// historical collection when asked for or when the range starts
    /// before `first_modern_year`.
    #[must_use]
    pub fn plan_range(&self, range: DateRange, include_historical: bool) -> QueryPlan {
        let first: i32 = range.from().year().max(self.first_modern_year);
        let last: i32 = range.to().year();
        let selectors: Vec<SourceSelector> = if first <= last {
            vec![SourceSelector::YearsBetween { from: first, to: last }]
        } else {
            Vec::new()
        };

        QueryPlan { selectors }
            .push_historical_if(include_historical || self.is_pre_modern(range.from().year()))
    }

    /// Plans a single-date query: the date's year collection, then the
    /// historical collection when asked for or when the date is before
    /// `first_modern_year`.
    #[must_use]
    pub fn plan_exact(&self, date: Date, include_historical: bool) -> QueryPlan {
        QueryPlan {
            selectors: vec![SourceSelector::Year(date.year())],
        }
        .push_historical_if(include_historical || self.is_pre_modern(date.year()))
    }

    /// Plans a listing: one year when `year` is given, otherwise every
    /// year collection, then the historical collection when asked for or
    /// when `range` starts before `first_modern_year`.
    #[must_use]
    pub fn plan_listing(
        &self,
        year: Option<i32>,
        range: Option<DateRange>,
        include_historical: bool,
    ) -> QueryPlan {
        let selector: SourceSelector = year.map_or(SourceSelector::AllYears, SourceSelector::Year);
        let reaches_back: bool = range.is_some_and(|range| self.is_pre_modern(range.from().year()));

        QueryPlan {
            selectors: vec![selector],
        }
        .push_historical_if(include_historical || reaches_back)
    }
}
