// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{HolidayProvider, HolidaySource, SourceKey, StoreError};
use roj_domain::{HolidayRecord, Language, LocalizedText, Region};
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use time::Date;

static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

/// A scratch data directory removed on drop.
pub struct TempDataDir {
    path: PathBuf,
}

impl TempDataDir {
    pub fn new() -> Self {
        let n: usize = NEXT_DIR.fetch_add(1, Ordering::SeqCst);
        let path: PathBuf =
            std::env::temp_dir().join(format!("roj-store-test-{}-{n}", std::process::id()));
        let _ = std::fs::remove_dir_all(&path);
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path: PathBuf = self.path.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    pub fn write_collection(&self, name: &str, holidays: &[Value]) -> PathBuf {
        let document: Value = json!({ "holidays": holidays });
        self.write(name, &serde_json::to_string_pretty(&document).unwrap())
    }
}

impl Drop for TempDataDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

/// A well-formed stored record without a stored Kurdish date.
pub fn raw_holiday(date: &str, region: &str, holiday_type: &str) -> Value {
    json!({
        "date": date,
        "isHoliday": true,
        "event": { "en": "Newroz", "ku": "نەورۆز", "ar": "نوروز", "fa": "نوروز" },
        "note": { "en": "", "ku": "" },
        "region": region,
        "type": holiday_type,
        "image": null
    })
}

pub fn record(date: Date, region: Region) -> HolidayRecord {
    let event: LocalizedText = LocalizedText::default()
        .with(Language::En, "Event")
        .with(Language::Ku, "بۆنە")
        .with(Language::Ar, "مناسبة")
        .with(Language::Fa, "رویداد");
    HolidayRecord::new(date, true, event, LocalizedText::default(), region).unwrap()
}

/// Counts fetches made against the wrapped provider.
pub struct CountingProvider<P> {
    pub inner: P,
    pub fetches: AtomicUsize,
}

impl<P> CountingProvider<P> {
    pub const fn new(inner: P) -> Self {
        Self {
            inner,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl<P: HolidayProvider> HolidayProvider for CountingProvider<P> {
    fn fetch(&self, key: SourceKey) -> Result<HolidaySource, StoreError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        // Widen the window in which concurrent fetches could overlap.
        std::thread::sleep(std::time::Duration::from_millis(20));
        self.inner.fetch(key)
    }

    fn available_years(&self) -> Result<Vec<i32>, StoreError> {
        self.inner.available_years()
    }
}
