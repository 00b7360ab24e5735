// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use roj::{DEFAULT_FIRST_MODERN_YEAR, QueryConfig};
use roj_api::{
    ApiError, GregorianToKurdishRequest, GregorianToKurdishResponse, HolidayFilterRequest,
    HolidayListRequest, HolidayResponse, KurdishToGregorianRequest, KurdishToGregorianResponse,
    ServiceInfo, ValidateKurdishDateRequest, ValidateKurdishDateResponse,
    convert_gregorian_to_kurdish, convert_kurdish_to_gregorian, query_all, query_by_exact_date,
    query_by_range, query_today, service_info, validate_kurdish_date,
};
use roj_domain::parse_timezone;
use roj_store::{CachedHolidayStore, FileHolidayStore, HolidayProvider};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

/// Roj Server - HTTP server for Kurdish holidays and calendar conversion
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding `{year}.json` and `historical.json`
    #[arg(short, long, default_value = "data/years")]
    data_dir: PathBuf,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 8000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    bind: IpAddr,

    /// IANA time zone used to decide what "today" is
    #[arg(short, long, default_value = "Asia/Baghdad")]
    timezone: String,

    /// First year with its own collection; earlier dates use the historical one
    #[arg(long, default_value_t = DEFAULT_FIRST_MODERN_YEAR)]
    first_modern_year: i32,

    /// Re-read collection files on every request instead of caching them
    #[arg(long)]
    no_cache: bool,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// Where holiday collections come from.
    provider: Arc<dyn HolidayProvider>,
    /// Query planning settings.
    config: QueryConfig,
    /// Time zone for "today".
    timezone: Arc<str>,
}

/// Error body returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::InvalidDateFormat { .. }
            | ApiError::InvalidKurdishDate { .. }
            | ApiError::InvalidRange { .. }
            | ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::SourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::MalformedSource { .. } | ApiError::Internal { .. } => {
                error!(error = %err, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Runs a blocking query on the blocking thread pool.
async fn run_blocking<T, F>(work: F) -> Result<T, HttpError>
where
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|err| {
            error!(error = %err, "Query task failed");
            HttpError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: format!("Internal error: {err}"),
            }
        })?
        .map_err(HttpError::from)
}

/// Handler for GET `/`.
async fn handle_root() -> Json<ServiceInfo> {
    Json(service_info())
}

/// Handler for GET `/api/v1/holidays`.
async fn handle_list_holidays(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<HolidayListRequest>,
) -> Result<Json<Vec<HolidayResponse>>, HttpError> {
    info!(year = ?query.year, region = ?query.region, "Handling list_holidays request");

    let response: Vec<HolidayResponse> =
        run_blocking(move || query_all(&*app_state.provider, &app_state.config, &query)).await?;
    Ok(Json(response))
}

/// Handler for GET `/api/v1/holidays/today`.
async fn handle_today(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<HolidayFilterRequest>,
) -> Result<Json<Vec<HolidayResponse>>, HttpError> {
    info!(timezone = %app_state.timezone, "Handling today request");

    let now: chrono::DateTime<chrono::Utc> = chrono::Utc::now();
    let response: Vec<HolidayResponse> = run_blocking(move || {
        query_today(
            &*app_state.provider,
            &app_state.config,
            &app_state.timezone,
            now,
            &query,
        )
    })
    .await?;
    Ok(Json(response))
}

/// Handler for GET `/api/v1/holidays/{date}`.
async fn handle_holidays_on(
    AxumState(app_state): AxumState<AppState>,
    Path(date): Path<String>,
    Query(query): Query<HolidayFilterRequest>,
) -> Result<Json<Vec<HolidayResponse>>, HttpError> {
    info!(date = %date, "Handling holidays_on request");

    let response: Vec<HolidayResponse> = run_blocking(move || {
        query_by_exact_date(&*app_state.provider, &app_state.config, &date, &query)
    })
    .await?;
    Ok(Json(response))
}

/// Handler for GET `/api/v1/holidays/range/{from}/{to}`.
async fn handle_holidays_between(
    AxumState(app_state): AxumState<AppState>,
    Path((from, to)): Path<(String, String)>,
    Query(query): Query<HolidayFilterRequest>,
) -> Result<Json<Vec<HolidayResponse>>, HttpError> {
    info!(from = %from, to = %to, "Handling holidays_between request");

    let response: Vec<HolidayResponse> = run_blocking(move || {
        query_by_range(&*app_state.provider, &app_state.config, &from, &to, &query)
    })
    .await?;
    Ok(Json(response))
}

/// Handler for POST `/api/v1/calendar/convert/gregorian-to-kurdish`.
async fn handle_gregorian_to_kurdish(
    Json(req): Json<GregorianToKurdishRequest>,
) -> Result<Json<GregorianToKurdishResponse>, HttpError> {
    info!(date = %req.date, "Handling gregorian_to_kurdish request");
    Ok(Json(convert_gregorian_to_kurdish(&req)?))
}

/// Handler for GET `/api/v1/calendar/convert/gregorian-to-kurdish/{date}`.
async fn handle_get_gregorian_to_kurdish(
    Path(date): Path<String>,
) -> Result<Json<GregorianToKurdishResponse>, HttpError> {
    info!(date = %date, "Handling gregorian_to_kurdish request");
    Ok(Json(convert_gregorian_to_kurdish(
        &GregorianToKurdishRequest { date },
    )?))
}

/// Handler for POST `/api/v1/calendar/convert/kurdish-to-gregorian`.
async fn handle_kurdish_to_gregorian(
    Json(req): Json<KurdishToGregorianRequest>,
) -> Result<Json<KurdishToGregorianResponse>, HttpError> {
    info!(year = req.year, month = %req.month, day = req.day, "Handling kurdish_to_gregorian request");
    Ok(Json(convert_kurdish_to_gregorian(&req)?))
}

/// Handler for GET `/api/v1/calendar/validate/kurdish-date`.
async fn handle_validate_kurdish_date(
    Query(query): Query<ValidateKurdishDateRequest>,
) -> Json<ValidateKurdishDateResponse> {
    info!(year = query.year, month = %query.month, day = query.day, "Handling validate_kurdish_date request");
    Json(validate_kurdish_date(&query))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route("/api/v1/holidays", get(handle_list_holidays))
        .route("/api/v1/holidays/today", get(handle_today))
        .route(
            "/api/v1/holidays/range/{from}/{to}",
            get(handle_holidays_between),
        )
        .route("/api/v1/holidays/{date}", get(handle_holidays_on))
        .route(
            "/api/v1/calendar/convert/gregorian-to-kurdish",
            post(handle_gregorian_to_kurdish),
        )
        .route(
            "/api/v1/calendar/convert/gregorian-to-kurdish/{date}",
            get(handle_get_gregorian_to_kurdish),
        )
        .route(
            "/api/v1/calendar/convert/kurdish-to-gregorian",
            post(handle_kurdish_to_gregorian),
        )
        .route(
            "/api/v1/calendar/validate/kurdish-date",
            get(handle_validate_kurdish_date),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Roj Server");

    // Fail fast on a bad time zone rather than on the first "today" request
    parse_timezone(&args.timezone)?;

    let files: FileHolidayStore = FileHolidayStore::new(&args.data_dir);
    info!(
        data_dir = %files.root().display(),
        years = ?files.available_years()?,
        "Using holiday data"
    );
    let provider: Arc<dyn HolidayProvider> = if args.no_cache {
        info!("Collection caching disabled");
        Arc::new(files)
    } else {
        Arc::new(CachedHolidayStore::new(files))
    };

    let app_state: AppState = AppState {
        provider,
        config: QueryConfig {
            first_modern_year: args.first_modern_year,
        },
        timezone: Arc::from(args.timezone),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
