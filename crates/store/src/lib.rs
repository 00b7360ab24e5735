// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only access to year-partitioned holiday collections.
//!
//! This crate owns the on-disk schema, the [`HolidayProvider`] capability
//! and its file-backed, in-memory, and caching implementations, plus the
//! integrity tooling for stored Kurdish dates.

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

mod cache;
mod error;
mod file;
pub mod integrity;
mod memory;
mod provider;
pub mod schema;
mod source;

#[cfg(test)]
mod tests;

pub use cache::CachedHolidayStore;
pub use error::StoreError;
pub use file::FileHolidayStore;
pub use integrity::{
    IntegrityIssue, IntegrityReport, IssueKind, check_collection, expected_kurdish_date,
    rewrite_kurdish_dates,
};
pub use memory::InMemoryHolidayStore;
pub use provider::{HolidayProvider, load, resolve_selector};
pub use schema::parse_collection;
pub use source::{HISTORICAL_SOURCE_NAME, HolidaySource, SourceKey, SourceSelector};
