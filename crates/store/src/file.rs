// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! File-backed holiday collections.
//!
//! A data directory holds one `{year}.json` per Gregorian year and a
//! single `historical.json`. Every fetch re-reads the file.

use crate::error::StoreError;
use crate::provider::HolidayProvider;
use crate::schema::parse_collection;
use crate::source::{HolidaySource, SourceKey};
use roj_domain::HolidayRecord;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Holiday collections stored as JSON files in one directory.
#[derive(Debug, Clone)]
pub struct FileHolidayStore {
    root: PathBuf,
}

impl FileHolidayStore {
    /// Creates a store over `root`. The directory is not touched until
    /// the first fetch.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the data directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the file path backing `key`.
    #[must_use]
    pub fn path_for(&self, key: SourceKey) -> PathBuf {
        self.root.join(format!("{}.json", key.name()))
    }

    /// Lists every collection file present, years first in ascending
    /// order, then the historical collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    pub fn list_keys(&self) -> Result<Vec<SourceKey>, StoreError> {
        let entries = std::fs::read_dir(&self.root)
            .map_err(|e| StoreError::io(self.root.display(), &e))?;

        let mut keys: Vec<SourceKey> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::io(self.root.display(), &e))?;
            let path: PathBuf = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            match SourceKey::from_name(stem) {
                Some(key) => keys.push(key),
                None => debug!(path = %path.display(), "Ignoring non-collection file"),
            }
        }
        keys.sort();
        Ok(keys)
    }

    /// Reads the unparsed bytes of the collection file for `key`.
    pub(crate) fn read_raw(&self, key: SourceKey) -> Result<Vec<u8>, StoreError> {
        let path: PathBuf = self.path_for(key);
        std::fs::read(&path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                StoreError::SourceNotFound { key }
            } else {
                StoreError::io(path.display(), &err)
            }
        })
    }
}

impl HolidayProvider for FileHolidayStore {
    fn fetch(&self, key: SourceKey) -> Result<HolidaySource, StoreError> {
        let path: PathBuf = self.path_for(key);
        let bytes: Vec<u8> = self.read_raw(key)?;

        let records: Vec<HolidayRecord> = parse_collection(key, &bytes).inspect_err(|err| {
            warn!(path = %path.display(), error = %err, "Rejected holiday collection");
        })?;
        debug!(path = %path.display(), count = records.len(), "Read holiday collection");

        Ok(HolidaySource::new(key, records))
    }

    fn available_years(&self) -> Result<Vec<i32>, StoreError> {
        Ok(self
            .list_keys()?
            .into_iter()
            .filter_map(|key| match key {
                SourceKey::Year(year) => Some(year),
                SourceKey::Historical => None,
            })
            .collect())
    }
}
