// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StoreError;
use crate::provider::HolidayProvider;
use crate::source::{HolidaySource, SourceKey};
use roj_domain::HolidayRecord;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Holiday collections held in memory.
///
/// Used by tests and by callers that assemble data themselves.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHolidayStore {
    sources: BTreeMap<SourceKey, Arc<[HolidayRecord]>>,
}

impl InMemoryHolidayStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the collection for `key`.
    #[must_use]
    pub fn with_source(mut self, key: SourceKey, records: Vec<HolidayRecord>) -> Self {
        self.sources.insert(key, records.into());
        self
    }
}

impl HolidayProvider for InMemoryHolidayStore {
    fn fetch(&self, key: SourceKey) -> Result<HolidaySource, StoreError> {
        self.sources
            .get(&key)
            .map(|records| HolidaySource::new(key, Arc::clone(records)))
            .ok_or(StoreError::SourceNotFound { key })
    }

    fn available_years(&self) -> Result<Vec<i32>, StoreError> {
        Ok(self
            .sources
            .keys()
            .filter_map(|key| match key {
                SourceKey::Year(year) => Some(*year),
                SourceKey::Historical => None,
            })
            .collect())
    }
}
