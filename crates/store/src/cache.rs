// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Caching provider.
//!
//! Guarantees:
//! - at most one load of a given key is in flight at a time; concurrent
//!   requests for the same key wait for it and share its result
//! - a published entry is never mutated, only replaced after an explicit
//!   [`CachedHolidayStore::reload`] or [`CachedHolidayStore::invalidate`]
//! - failed loads are not cached and leave no entry behind

use crate::error::StoreError;
use crate::provider::HolidayProvider;
use crate::source::{HolidaySource, SourceKey};
use roj_domain::HolidayRecord;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

type Slot = Arc<Mutex<Option<Arc<[HolidayRecord]>>>>;

/// Wraps a provider and keeps every successfully loaded collection.
#[derive(Debug)]
pub struct CachedHolidayStore<P> {
    inner: P,
    slots: Mutex<HashMap<SourceKey, Slot>>,
}

impl<P: HolidayProvider> CachedHolidayStore<P> {
    #[must_use]
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the wrapped provider.
    #[must_use]
    pub const fn inner(&self) -> &P {
        &self.inner
    }

    /// Drops every cached collection. The next fetch of each key reloads it.
    pub fn reload(&self) {
        let mut slots = self.lock_slots();
        debug!(entries = slots.len(), "Dropping holiday cache");
        slots.clear();
    }

    /// Drops the cached collection for one key.
    pub fn invalidate(&self, key: SourceKey) {
        self.lock_slots().remove(&key);
    }

    /// Returns the keys with a published entry.
    #[must_use]
    pub fn cached_keys(&self) -> Vec<SourceKey> {
        let slots = self.lock_slots();
        let mut keys: Vec<SourceKey> = slots
            .iter()
            .filter(|(_, slot)| lock_ignoring_poison(slot).is_some())
            .map(|(key, _)| *key)
            .collect();
        keys.sort();
        keys
    }

    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.lock_slots().len()
    }

    fn lock_slots(&self) -> MutexGuard<'_, HashMap<SourceKey, Slot>> {
        lock_ignoring_poison(&self.slots)
    }

    fn slot(&self, key: SourceKey) -> Slot {
        Arc::clone(self.lock_slots().entry(key).or_default())
    }

    /// Removes `slot` if it is still the one mapped to `key`, is unpublished
    /// and no other fetch is loading into it.
    fn discard_empty_slot(&self, key: SourceKey, slot: &Slot) {
        let mut slots = self.lock_slots();
        let unused: bool = slots.get(&key).is_some_and(|current| {
            Arc::ptr_eq(current, slot) && current.try_lock().is_ok_and(|entry| entry.is_none())
        });
        if unused {
            slots.remove(&key);
        }
    }
}

impl<P: HolidayProvider> HolidayProvider for CachedHolidayStore<P> {
    fn fetch(&self, key: SourceKey) -> Result<HolidaySource, StoreError> {
        let slot: Slot = self.slot(key);
        // Held across the load so concurrent fetches of this key wait here.
        let mut entry = lock_ignoring_poison(&slot);

        if let Some(records) = entry.as_ref() {
            return Ok(HolidaySource::new(key, Arc::clone(records)));
        }

        let source: HolidaySource = match self.inner.fetch(key) {
            Ok(source) => source,
            Err(error) => {
                drop(entry);
                self.discard_empty_slot(key, &slot);
                return Err(error);
            }
        };
        debug!(source = %key, count = source.len(), "Cached holiday collection");
        *entry = Some(source.shared_records());
        drop(entry);
        Ok(source)
    }

    fn available_years(&self) -> Result<Vec<i32>, StoreError> {
        self.inner.available_years()
    }
}

// Entries are replaced whole, so a panic mid-load cannot leave one half written.
fn lock_ignoring_poison<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
