// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::source::SourceKey;
use thiserror::Error;

/// Errors that can occur while loading holiday collections.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No collection exists for the requested key.
    #[error("No holiday collection for {key}")]
    SourceNotFound { key: SourceKey },

    /// The collection exists but violates the schema.
    #[error("Malformed holiday collection {key}: {reason}")]
    MalformedSource { key: SourceKey, reason: String },

    /// The backing store could not be read or written.
    #[error("I/O error on {location}: {message}")]
    Io { location: String, message: String },
}

impl StoreError {
    pub(crate) fn io(location: impl std::fmt::Display, err: &std::io::Error) -> Self {
        Self::Io {
            location: location.to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn malformed(key: SourceKey, reason: impl Into<String>) -> Self {
        Self::MalformedSource {
            key,
            reason: reason.into(),
        }
    }
}
