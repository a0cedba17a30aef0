use super::models::{DepthRangeParams, Earthquake, MagnitudeRangeParams, RegionCount, TopQueryParams};
use crate::common::{error::AppError, models::ErrorBody, state::AppState};
use crate::repository::CatalogRepository;
use axum::{
    Json,
    extract::{Query, State},
};
use std::num::NonZeroU64;
use tracing::{debug, info};
use utoipa_axum::{router::OpenApiRouter, routes};

pub const DEFAULT_TOP_N: u64 = 10;

pub fn router(state: &AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(get_all_earthquakes))
        .routes(routes!(get_top_earthquakes))
        .routes(routes!(get_region_counts))
        .routes(routes!(get_by_magnitude_range))
        .routes(routes!(get_by_depth_range))
        .with_state(state.clone())
}

/// Validates a requested top-N size: zero is rejected, anything above the
/// configured ceiling is lowered to it.
pub fn resolve_top_n(requested: Option<u64>, ceiling: u64) -> Result<NonZeroU64, AppError> {
    let requested = requested.unwrap_or(DEFAULT_TOP_N);
    let n = NonZeroU64::new(requested)
        .ok_or_else(|| AppError::InvalidParameter("limit must be a positive integer".into()))?;
    if n.get() > ceiling {
        debug!(requested, ceiling, "Top-N request lowered to configured ceiling");
        return NonZeroU64::new(ceiling)
            .ok_or_else(|| AppError::InvalidParameter("top-N ceiling is zero".into()));
    }
    Ok(n)
}

#[utoipa::path(
    get,
    path = "/earthquakes",
    responses(
        (status = 200, description = "Every catalogued event, newest first", body = [Earthquake]),
        (status = 503, description = "Database unavailable", body = ErrorBody),
        (status = 500, description = "Query failed", body = ErrorBody)
    ),
    summary = "List all earthquakes"
)]
pub async fn get_all_earthquakes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Earthquake>>, AppError> {
    let records = state.db.fetch_all_records().await?;
    info!(rows = records.len(), "Returning full catalog");
    Ok(Json(records))
}

#[utoipa::path(
    get,
    path = "/top",
    params(TopQueryParams),
    responses(
        (status = 200, description = "Strongest events, ties ordered by id", body = [Earthquake]),
        (status = 400, description = "Limit is not a positive integer", body = ErrorBody),
        (status = 503, description = "Database unavailable", body = ErrorBody)
    ),
    summary = "Get the strongest earthquakes"
)]
pub async fn get_top_earthquakes(
    State(state): State<AppState>,
    Query(params): Query<TopQueryParams>,
) -> Result<Json<Vec<Earthquake>>, AppError> {
    let n = resolve_top_n(params.limit, state.config.top_n_limit)?;
    Ok(Json(state.db.fetch_top_by_magnitude(n).await?))
}

#[utoipa::path(
    get,
    path = "/regions",
    responses(
        (status = 200, description = "Event count per region label, most active first", body = [RegionCount]),
        (status = 503, description = "Database unavailable", body = ErrorBody)
    ),
    summary = "Count earthquakes per region"
)]
pub async fn get_region_counts(
    State(state): State<AppState>,
) -> Result<Json<Vec<RegionCount>>, AppError> {
    Ok(Json(state.db.fetch_counts_by_region().await?))
}

#[utoipa::path(
    get,
    path = "/magnitude",
    params(MagnitudeRangeParams),
    responses(
        (status = 200, description = "Events within the inclusive magnitude range, strongest first", body = [Earthquake]),
        (status = 400, description = "Bounds are not numeric"),
        (status = 503, description = "Database unavailable", body = ErrorBody)
    ),
    summary = "Earthquakes in a magnitude range",
    description = "A range whose minimum exceeds its maximum returns an empty list."
)]
pub async fn get_by_magnitude_range(
    State(state): State<AppState>,
    Query(params): Query<MagnitudeRangeParams>,
) -> Result<Json<Vec<Earthquake>>, AppError> {
    Ok(Json(
        state
            .db
            .fetch_by_magnitude_range(params.min, params.max)
            .await?,
    ))
}

#[utoipa::path(
    get,
    path = "/depth",
    params(DepthRangeParams),
    responses(
        (status = 200, description = "Events within the inclusive depth range, deepest first", body = [Earthquake]),
        (status = 400, description = "Bounds are not integers"),
        (status = 503, description = "Database unavailable", body = ErrorBody)
    ),
    summary = "Earthquakes in a depth range",
    description = "A range whose minimum exceeds its maximum returns an empty list."
)]
pub async fn get_by_depth_range(
    State(state): State<AppState>,
    Query(params): Query<DepthRangeParams>,
) -> Result<Json<Vec<Earthquake>>, AppError> {
    Ok(Json(
        state.db.fetch_by_depth_range(params.min, params.max).await?,
    ))
}
