// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The query surface.
//!
//! Every operation validates its raw input, plans which collections it
//! needs, runs the pipeline, and projects the result to one language.

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::projection::project_all;
use crate::request_response::{
    GregorianToKurdishRequest, GregorianToKurdishResponse, HolidayFilterRequest,
    HolidayListRequest, HolidayResponse, KurdishDateInput, KurdishDateInfo,
    KurdishToGregorianRequest, KurdishToGregorianResponse, MonthInput, ServiceInfo,
    ValidateKurdishDateRequest, ValidateKurdishDateResponse,
};
use chrono::{DateTime, Utc};
use roj::{
    DateRange, DateSelection, HolidayCriteria, QueryConfig, QueryOutcome, QueryPlan, run_query,
};
use roj_domain::{
    DomainError, HolidayType, KurdishDate, KurdishMonth, Language, Region, date_in_timezone,
    format_gregorian_date, gregorian_to_kurdish, is_valid_kurdish_date, is_verified_conversion,
    kurdish_date_to_gregorian, parse_gregorian_date, parse_timezone,
};
use roj_store::HolidayProvider;
use time::{Date, Month};
use tracing::{debug, warn};

const STATUS_SUCCESS: &str = "success";

/// Filters shared by every holiday query, already validated.
struct ParsedFilters {
    language: Language,
    region: Option<Region>,
    holiday_type: Option<HolidayType>,
    is_holiday: Option<bool>,
    include_historical: bool,
}

impl ParsedFilters {
    fn parse(
        lang: Option<&str>,
        region: Option<&str>,
        holiday_type: Option<&str>,
        is_holiday: Option<bool>,
        include_historical: Option<bool>,
    ) -> Result<Self, ApiError> {
        let language: Language = lang
            .map_or(Ok(Language::default()), str::parse)
            .map_err(translate_domain_error)?;
        let region: Option<Region> = region
            .map(str::parse)
            .transpose()
            .map_err(translate_domain_error)?;
        let holiday_type: Option<HolidayType> = holiday_type
            .map(str::parse)
            .transpose()
            .map_err(translate_domain_error)?;

        Ok(Self {
            language,
            region,
            holiday_type,
            is_holiday,
            include_historical: include_historical.unwrap_or(false),
        })
    }

    fn from_request(request: &HolidayFilterRequest) -> Result<Self, ApiError> {
        Self::parse(
            request.lang.as_deref(),
            request.region.as_deref(),
            request.holiday_type.as_deref(),
            request.is_holiday,
            request.include_historical,
        )
    }

    const fn criteria(&self, selection: DateSelection) -> HolidayCriteria {
        HolidayCriteria {
            selection,
            year: None,
            month: None,
            day: None,
            is_holiday: self.is_holiday,
            region: self.region,
            holiday_type: self.holiday_type,
        }
    }
}

fn run<P: HolidayProvider + ?Sized>(
    provider: &P,
    plan: &QueryPlan,
    criteria: &HolidayCriteria,
    language: Language,
) -> Result<Vec<HolidayResponse>, ApiError> {
    let outcome: QueryOutcome = run_query(provider, plan, criteria).map_err(translate_core_error)?;
    if !outcome.rejected.is_empty() {
        warn!(
            rejected = outcome.rejected.len(),
            "Answered query without malformed collections"
        );
    }
    debug!(count = outcome.records.len(), "Holiday query matched");
    Ok(project_all(&outcome.records, language))
}

fn parse_range(from: &str, to: &str) -> Result<DateRange, ApiError> {
    let from: Date = parse_gregorian_date(from).map_err(translate_domain_error)?;
    let to: Date = parse_gregorian_date(to).map_err(translate_domain_error)?;
    DateRange::new(from, to).map_err(translate_core_error)
}

/// Lists holidays matching the given filters.
///
/// # Arguments
///
/// * `provider` - Where holiday collections are read from
/// * `config` - Query planning settings
/// * `request` - The raw filters
///
/// # Errors
///
/// Returns an error if:
/// - `lang`, `region`, `type`, `month`, or `day` is not recognized
/// - only one of `from_date` and `to_date` is given
/// - a range bound is not `YYYY-MM-DD` or the range is reversed
/// - the provider cannot be read
pub fn query_all<P: HolidayProvider + ?Sized>(
    provider: &P,
    config: &QueryConfig,
    request: &HolidayListRequest,
) -> Result<Vec<HolidayResponse>, ApiError> {
    let filters: ParsedFilters = ParsedFilters::parse(
        request.lang.as_deref(),
        request.region.as_deref(),
        request.holiday_type.as_deref(),
        request.is_holiday,
        request.include_historical,
    )?;

    let month: Option<Month> = request
        .month
        .map(|number| {
            Month::try_from(number).map_err(|_| ApiError::InvalidInput {
                field: String::from("month"),
                message: format!("Month must be between 1 and 12, got {number}"),
            })
        })
        .transpose()?;
    if let Some(day) = request.day.filter(|day| !(1..=31).contains(day)) {
        return Err(ApiError::InvalidInput {
            field: String::from("day"),
            message: format!("Day must be between 1 and 31, got {day}"),
        });
    }

    let range: Option<DateRange> = match (&request.from_date, &request.to_date) {
        (Some(from), Some(to)) => Some(parse_range(from, to)?),
        (None, None) => None,
        (Some(_), None) | (None, Some(_)) => {
            return Err(ApiError::InvalidInput {
                field: String::from("from_date/to_date"),
                message: String::from("Both from_date and to_date must be given together"),
            });
        }
    };

    let plan: QueryPlan = config.plan_listing(request.year, range, filters.include_historical);
    let selection: DateSelection = range.map_or(DateSelection::Any, DateSelection::Range);
    let criteria: HolidayCriteria = filters
        .criteria(selection)
        .with_year(request.year)
        .with_month(month)
        .with_day(request.day);

    run(provider, &plan, &criteria, filters.language)
}

/// Lists holidays on one date.
///
/// # Errors
///
/// Returns an error if the date is not `YYYY-MM-DD`, a filter is not
/// recognized, or the provider cannot be read.
pub fn query_by_exact_date<P: HolidayProvider + ?Sized>(
    provider: &P,
    config: &QueryConfig,
    date: &str,
    request: &HolidayFilterRequest,
) -> Result<Vec<HolidayResponse>, ApiError> {
    let date: Date = parse_gregorian_date(date).map_err(translate_domain_error)?;
    query_on(provider, config, date, request)
}

fn query_on<P: HolidayProvider + ?Sized>(
    provider: &P,
    config: &QueryConfig,
    date: Date,
    request: &HolidayFilterRequest,
) -> Result<Vec<HolidayResponse>, ApiError> {
    let filters: ParsedFilters = ParsedFilters::from_request(request)?;
    let plan: QueryPlan = config.plan_exact(date, filters.include_historical);
    run(
        provider,
        &plan,
        &filters.criteria(DateSelection::Exact(date)),
        filters.language,
    )
}

/// Lists holidays between two dates inclusive, sorted by date.
///
/// # Errors
///
/// Returns an error if:
/// - a bound is not `YYYY-MM-DD`
/// - `from` is after `to`
/// - a filter is not recognized
/// - the provider cannot be read
pub fn query_by_range<P: HolidayProvider + ?Sized>(
    provider: &P,
    config: &QueryConfig,
    from: &str,
    to: &str,
    request: &HolidayFilterRequest,
) -> Result<Vec<HolidayResponse>, ApiError> {
    let range: DateRange = parse_range(from, to)?;
    let filters: ParsedFilters = ParsedFilters::from_request(request)?;
    let plan: QueryPlan = config.plan_range(range, filters.include_historical);
    run(
        provider,
        &plan,
        &filters.criteria(DateSelection::Range(range)),
        filters.language,
    )
}

/// Lists holidays on the date that `now` falls on in `timezone`.
///
/// # Errors
///
/// Returns an error if the time zone is unknown, a filter is not
/// recognized, or the provider cannot be read.
pub fn query_today<P: HolidayProvider + ?Sized>(
    provider: &P,
    config: &QueryConfig,
    timezone: &str,
    now: DateTime<Utc>,
    request: &HolidayFilterRequest,
) -> Result<Vec<HolidayResponse>, ApiError> {
    let today: Date = parse_timezone(timezone)
        .and_then(|tz| date_in_timezone(now, tz))
        .map_err(translate_domain_error)?;
    debug!(today = %format_gregorian_date(today), timezone, "Resolved today");
    query_on(provider, config, today, request)
}

/// Converts a Gregorian date to the Kurdish calendar.
///
/// # Errors
///
/// Returns `InvalidDateFormat` if the date is not `YYYY-MM-DD`.
pub fn convert_gregorian_to_kurdish(
    request: &GregorianToKurdishRequest,
) -> Result<GregorianToKurdishResponse, ApiError> {
    let date: Date = parse_gregorian_date(&request.date).map_err(translate_domain_error)?;
    let kurdish: KurdishDate = gregorian_to_kurdish(date);

    Ok(GregorianToKurdishResponse {
        status: String::from(STATUS_SUCCESS),
        gregorian_date: format_gregorian_date(date),
        kurdish_date: KurdishDateInfo::from(kurdish),
        approximate: !is_verified_conversion(date),
    })
}

fn resolve_month(month: &MonthInput) -> Result<KurdishMonth, DomainError> {
    match month {
        MonthInput::Number(number) => KurdishMonth::from_number(*number),
        MonthInput::Name(name) => name
            .trim()
            .parse::<u8>()
            .map_or_else(|_| name.trim().parse(), KurdishMonth::from_number),
    }
}

/// Converts a Kurdish date to the Gregorian calendar.
///
/// # Errors
///
/// Returns `InvalidKurdishDate` if the month is not recognized or the day
/// is outside the month.
pub fn convert_kurdish_to_gregorian(
    request: &KurdishToGregorianRequest,
) -> Result<KurdishToGregorianResponse, ApiError> {
    let month: KurdishMonth = resolve_month(&request.month).map_err(translate_domain_error)?;
    let kurdish: KurdishDate =
        KurdishDate::new(request.year, month, request.day).map_err(translate_domain_error)?;
    let date: Date = kurdish_date_to_gregorian(kurdish).map_err(translate_domain_error)?;

    Ok(KurdishToGregorianResponse {
        status: String::from(STATUS_SUCCESS),
        kurdish_date: KurdishDateInfo::from(kurdish),
        gregorian_date: format_gregorian_date(date),
        approximate: !is_verified_conversion(date),
    })
}

/// Reports whether a Kurdish date exists. Never fails: an unrecognized
/// month or an out-of-range day is simply invalid.
#[must_use]
pub fn validate_kurdish_date(request: &ValidateKurdishDateRequest) -> ValidateKurdishDateResponse {
    let is_valid: bool = resolve_month(&request.month)
        .is_ok_and(|month| is_valid_kurdish_date(request.year, month, request.day));

    ValidateKurdishDateResponse {
        status: String::from(STATUS_SUCCESS),
        kurdish_date: KurdishDateInput {
            year: request.year,
            month: request.month.to_string(),
            day: request.day,
        },
        is_valid,
    }
}

/// Describes the service.
#[must_use]
pub fn service_info() -> ServiceInfo {
    ServiceInfo {
        name: String::from("Kurdistan Calendar API"),
        version: String::from(env!("CARGO_PKG_VERSION")),
        description: String::from(
            "Access Kurdish holidays, historical events, and cultural celebrations",
        ),
        documentation: String::from("/api/v1"),
    }
}
