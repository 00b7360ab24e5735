// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roj_domain::{DomainError, format_gregorian_date};
use roj_store::StoreError;
use time::Date;

/// Errors that can occur while planning or running a holiday query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The end of a date range precedes its start.
    InvalidRange {
        /// Range start.
        from: Date,
        /// Range end.
        to: Date,
    },
    /// A collection could not be read.
    Store(StoreError),
    /// A domain rule was violated.
    Domain(DomainError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRange { from, to } => write!(
                f,
                "Invalid date range: {} is after {}",
                format_gregorian_date(*from),
                format_gregorian_date(*to)
            ),
            Self::Store(err) => write!(f, "{err}"),
            Self::Domain(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}
