// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The read-only data-provider capability.
//!
//! Query code never touches files directly; it is handed a
//! [`HolidayProvider`] and asks it for collections by key. File-backed,
//! in-memory, and caching providers are interchangeable.

use crate::error::StoreError;
use crate::source::{HolidaySource, SourceKey, SourceSelector};
use roj_domain::HolidayRecord;
use tracing::debug;

/// A read-only source of holiday collections.
///
/// Implementations must be safe to share between concurrent requests.
pub trait HolidayProvider: Send + Sync {
    /// Fetches one collection.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - no collection exists for `key` (`SourceNotFound`)
    /// - the collection violates the schema (`MalformedSource`)
    /// - the backing store cannot be read (`Io`)
    fn fetch(&self, key: SourceKey) -> Result<HolidaySource, StoreError>;

    /// Lists the years that have a collection, in ascending order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be listed.
    fn available_years(&self) -> Result<Vec<i32>, StoreError>;
}

impl<P: HolidayProvider + ?Sized> HolidayProvider for std::sync::Arc<P> {
    fn fetch(&self, key: SourceKey) -> Result<HolidaySource, StoreError> {
        (**self).fetch(key)
    }

    fn available_years(&self) -> Result<Vec<i32>, StoreError> {
        (**self).available_years()
    }
}

/// Resolves a selector to the keys it covers.
///
/// # Errors
///
/// Returns an error if the provider cannot list its years.
pub fn resolve_selector<P: HolidayProvider + ?Sized>(
    provider: &P,
    selector: SourceSelector,
) -> Result<Vec<SourceKey>, StoreError> {
    match selector {
        SourceSelector::Year(year) => Ok(vec![SourceKey::Year(year)]),
        SourceSelector::Historical => Ok(vec![SourceKey::Historical]),
        SourceSelector::AllYears => Ok(provider
            .available_years()?
            .into_iter()
            .map(SourceKey::Year)
            .collect()),
        SourceSelector::YearsBetween { from, to } => Ok(provider
            .available_years()?
            .into_iter()
            .filter(|year| (from..=to).contains(year))
            .map(SourceKey::Year)
            .collect()),
    }
}

/// Loads every record covered by `selector`, in collection order.
///
/// # Errors
///
/// Returns an error if:
/// - a specific year or the historical collection is requested and absent
///   (`SourceNotFound`)
/// - any covered collection is malformed or unreadable
pub fn load<P: HolidayProvider + ?Sized>(
    provider: &P,
    selector: SourceSelector,
) -> Result<Vec<HolidayRecord>, StoreError> {
    let mut records: Vec<HolidayRecord> = Vec::new();
    for key in resolve_selector(provider, selector)? {
        let source: HolidaySource = provider.fetch(key)?;
        debug!(source = %key, count = source.len(), "Loaded holiday collection");
        records.extend_from_slice(source.records());
    }
    Ok(records)
}
