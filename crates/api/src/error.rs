// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use roj::CoreError;
use roj_domain::{DomainError, format_gregorian_date};
use roj_store::StoreError;

/// API-level errors.
///
/// These are distinct from domain/core/store errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A date string is not `YYYY-MM-DD`.
    InvalidDateFormat {
        /// The rejected input.
        value: String,
    },
    /// A Kurdish month or day is out of range.
    InvalidKurdishDate {
        /// A human-readable description of the problem.
        message: String,
    },
    /// A range ends before it starts.
    InvalidRange {
        /// Range start as given.
        from: String,
        /// Range end as given.
        to: String,
    },
    /// A specifically requested collection does not exist.
    SourceNotFound {
        /// The collection name.
        collection: String,
    },
    /// A collection violates the schema.
    MalformedSource {
        /// The collection name.
        collection: String,
        /// What is wrong with it.
        reason: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateFormat { value } => {
                write!(f, "Invalid date format '{value}'. Use YYYY-MM-DD")
            }
            Self::InvalidKurdishDate { message } => {
                write!(f, "Invalid Kurdish date: {message}")
            }
            Self::InvalidRange { from, to } => {
                write!(f, "Invalid date range: end date {to} is before start date {from}")
            }
            Self::SourceNotFound { collection } => {
                write!(f, "No holiday data for {collection}")
            }
            Self::MalformedSource { collection, reason } => {
                write!(f, "Holiday data for {collection} is malformed: {reason}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidDateFormat { value } => ApiError::InvalidDateFormat { value },
        DomainError::InvalidKurdishMonth(_)
        | DomainError::InvalidKurdishDay { .. }
        | DomainError::KurdishYearOutOfRange(_) => ApiError::InvalidKurdishDate {
            message: err.to_string(),
        },
        DomainError::InvalidRegion(_) => ApiError::InvalidInput {
            field: String::from("region"),
            message: err.to_string(),
        },
        DomainError::InvalidHolidayType(_) => ApiError::InvalidInput {
            field: String::from("type"),
            message: err.to_string(),
        },
        DomainError::InvalidLanguage(_) => ApiError::InvalidInput {
            field: String::from("lang"),
            message: err.to_string(),
        },
        DomainError::DateArithmeticOverflow { .. } => ApiError::InvalidInput {
            field: String::from("date"),
            message: err.to_string(),
        },
        DomainError::MissingTranslation { .. } | DomainError::InvalidTimezone(_) => {
            ApiError::Internal {
                message: err.to_string(),
            }
        }
    }
}

/// Translates a store error into an API error.
#[must_use]
pub fn translate_store_error(err: StoreError) -> ApiError {
    match err {
        StoreError::SourceNotFound { key } => ApiError::SourceNotFound {
            collection: key.to_string(),
        },
        StoreError::MalformedSource { key, reason } => ApiError::MalformedSource {
            collection: key.to_string(),
            reason,
        },
        StoreError::Io { .. } => ApiError::Internal {
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::InvalidRange { from, to } => ApiError::InvalidRange {
            from: format_gregorian_date(from),
            to: format_gregorian_date(to),
        },
        CoreError::Store(store_err) => translate_store_error(store_err),
        CoreError::Domain(domain_err) => translate_domain_error(domain_err),
    }
}
