// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod aggregate;
mod criteria;
mod error;
mod filter;
mod plan;
mod query;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use aggregate::{AggregatedSet, aggregate};
pub use criteria::{DateRange, DateSelection, HolidayCriteria};
pub use error::CoreError;
pub use filter::filter;
pub use plan::{DEFAULT_FIRST_MODERN_YEAR, QueryConfig, QueryPlan};
pub use query::{LoadedSources, QueryOutcome, load_plan, run_query};
