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
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod handlers;
mod projection;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error, translate_store_error};
pub use handlers::{
    convert_gregorian_to_kurdish, convert_kurdish_to_gregorian, query_all, query_by_exact_date,
    query_by_range, query_today, service_info, validate_kurdish_date,
};
pub use projection::{project, project_all};
pub use request_response::{
    GregorianToKurdishRequest, GregorianToKurdishResponse, HolidayFilterRequest,
    HolidayListRequest, HolidayResponse, KurdishDateInfo, KurdishDateInput,
    KurdishToGregorianRequest, KurdishToGregorianResponse, MonthInput, ServiceInfo,
    ValidateKurdishDateRequest, ValidateKurdishDateResponse,
};
