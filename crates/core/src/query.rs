// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Running a planned query against a provider.

use crate::aggregate::{AggregatedSet, aggregate};
use crate::criteria::HolidayCriteria;
use crate::error::CoreError;
use crate::filter::filter;
use crate::plan::QueryPlan;
use roj_domain::HolidayRecord;
use roj_store::{HolidayProvider, HolidaySource, SourceKey, StoreError, resolve_selector};
use tracing::{debug, warn};

/// Collections read for one query.
#[derive(Debug, Clone, Default)]
pub struct LoadedSources {
    /// Successfully loaded collections, in plan order.
    pub sources: Vec<HolidaySource>,
    /// Collections that exist but were rejected as malformed.
    pub rejected: Vec<SourceKey>,
}

/// Result of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutcome {
    /// Matching records.
    pub records: Vec<HolidayRecord>,
    /// Collections skipped because they are malformed.
    pub rejected: Vec<SourceKey>,
}

/// Reads every collection in `plan`.
///
/// An absent collection contributes nothing. A malformed collection is
/// logged, recorded in `rejected`, and skipped; the others still load.
///
/// # Errors
///
/// Returns an error if the provider cannot be listed or read at all.
pub fn load_plan<P: HolidayProvider + ?Sized>(
    provider: &P,
    plan: &QueryPlan,
) -> Result<LoadedSources, CoreError> {
    let mut loaded: LoadedSources = LoadedSources::default();

    for selector in plan.selectors() {
        for key in resolve_selector(provider, *selector)? {
            match provider.fetch(key) {
                Ok(source) => loaded.sources.push(source),
                Err(StoreError::SourceNotFound { .. }) => {
                    debug!(source = %key, "No collection, contributing nothing");
                }
                Err(err @ StoreError::MalformedSource { .. }) => {
                    warn!(source = %key, error = %err, "Skipping malformed collection");
                    loaded.rejected.push(key);
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
    Ok(loaded)
}

/// Loads, merges, and filters in one step.
///
/// # Errors
///
/// Returns an error if the provider cannot be read.
pub fn run_query<P: HolidayProvider + ?Sized>(
    provider: &P,
    plan: &QueryPlan,
    criteria: &HolidayCriteria,
) -> Result<QueryOutcome, CoreError> {
    let loaded: LoadedSources = load_plan(provider, plan)?;
    let set: AggregatedSet = aggregate(&loaded.sources);
    debug!(
        sources = loaded.sources.len(),
        merged = set.len(),
        "Aggregated holiday collections"
    );

    Ok(QueryOutcome {
        records: filter(set, criteria),
        rejected: loaded.rejected,
    })
}
