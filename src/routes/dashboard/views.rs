use super::models::{
    AnalysisResponse, DashboardResponse, ExportParams, VisualizationParams, VisualizationPayload,
    VisualizationType,
};
use crate::analysis::aggregate::{
    MapPayload, SummaryMetrics, daily_activity, hourly_counts, rank_regions, top_by_magnitude,
    weekday_counts,
};
use crate::analysis::buckets::{depth_distribution, magnitude_distribution};
use crate::analysis::describe::{DescriptiveStats, histogram};
use crate::analysis::{FilterBounds, FilterParams, RecordFilter};
use crate::common::{error::AppError, models::ErrorBody, state::AppState};
use crate::export::{ExportColumn, export_filename, to_csv};
use crate::repository::CatalogRepository;
use crate::routes::earthquakes::models::{Earthquake, TopQueryParams};
use crate::routes::earthquakes::views::resolve_top_n;
use axum::{
    Json,
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use tracing::info;
use utoipa_axum::{router::OpenApiRouter, routes};

const TOP_REGIONS: usize = 10;
const MAP_STRONGEST: usize = 5;
const MAGNITUDE_BINS: usize = 20;
const DEPTH_BINS: usize = 30;

pub fn router(state: &AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(get_dashboard))
        .routes(routes!(get_filter_bounds))
        .routes(routes!(get_filtered_records))
        .routes(routes!(get_analysis))
        .routes(routes!(get_filtered_top))
        .routes(routes!(export_csv))
        .with_state(state.clone())
}

/// Loads the catalog and applies the filter. Returns the catalog size next
/// to the filtered set.
async fn load_filtered(
    state: &AppState,
    params: &FilterParams,
) -> Result<(usize, Vec<Earthquake>), AppError> {
    let records = state.db.fetch_all_records().await?;
    let filtered = RecordFilter::from(params).apply(&records);
    info!(
        catalog = records.len(),
        filtered = filtered.len(),
        "Applied record filter"
    );
    Ok((records.len(), filtered))
}

async fn build_payload(
    state: &AppState,
    visualization: VisualizationType,
    filtered: &[Earthquake],
) -> Result<VisualizationPayload, AppError> {
    let payload = match visualization {
        VisualizationType::Pie => VisualizationPayload::Pie {
            top_regions: rank_regions(filtered, Some(TOP_REGIONS)),
            magnitude_distribution: magnitude_distribution(filtered),
        },
        VisualizationType::Area => VisualizationPayload::Area {
            daily: daily_activity(filtered),
        },
        VisualizationType::Bar => VisualizationPayload::Bar {
            top_regions: rank_regions(filtered, Some(TOP_REGIONS)),
            depth_distribution: depth_distribution(filtered),
        },
        VisualizationType::Line => VisualizationPayload::Line {
            monthly: state.db.fetch_monthly_statistics().await?,
            hourly: hourly_counts(filtered),
        },
        VisualizationType::Map => VisualizationPayload::Map {
            map: MapPayload::from_records(filtered),
            strongest: top_by_magnitude(filtered, MAP_STRONGEST),
        },
    };
    Ok(payload)
}

#[utoipa::path(
    get,
    path = "/",
    params(FilterParams, VisualizationParams),
    responses(
        (status = 200, description = "Summary metrics and the selected chart's data", body = DashboardResponse),
        (status = 400, description = "A filter bound could not be parsed"),
        (status = 503, description = "Database unavailable", body = ErrorBody)
    ),
    summary = "Dashboard view",
    description = "Filters the catalog by magnitude, depth and date, then returns headline metrics and the data for the selected visualization."
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(filter): Query<FilterParams>,
    Query(selection): Query<VisualizationParams>,
) -> Result<Json<DashboardResponse>, AppError> {
    let visualization = selection.visualization.unwrap_or_default();
    let (catalog_events, filtered) = load_filtered(&state, &filter).await?;
    let payload = build_payload(&state, visualization, &filtered).await?;

    Ok(Json(DashboardResponse {
        visualization,
        summary: SummaryMetrics::compute(catalog_events, &filtered),
        payload,
    }))
}

#[utoipa::path(
    get,
    path = "/bounds",
    responses(
        (status = 200, description = "Smallest and largest magnitude, depth and date in the catalog", body = FilterBounds),
        (status = 503, description = "Database unavailable", body = ErrorBody)
    ),
    summary = "Filter bounds"
)]
pub async fn get_filter_bounds(
    State(state): State<AppState>,
) -> Result<Json<FilterBounds>, AppError> {
    let records = state.db.fetch_all_records().await?;
    Ok(Json(FilterBounds::from_records(&records)))
}

#[utoipa::path(
    get,
    path = "/records",
    params(FilterParams),
    responses(
        (status = 200, description = "Records matching every filter, newest first", body = [Earthquake]),
        (status = 400, description = "A filter bound could not be parsed"),
        (status = 503, description = "Database unavailable", body = ErrorBody)
    ),
    summary = "Filtered records"
)]
pub async fn get_filtered_records(
    State(state): State<AppState>,
    Query(filter): Query<FilterParams>,
) -> Result<Json<Vec<Earthquake>>, AppError> {
    let (_, filtered) = load_filtered(&state, &filter).await?;
    Ok(Json(filtered))
}

#[utoipa::path(
    get,
    path = "/analysis",
    params(FilterParams),
    responses(
        (status = 200, description = "Temporal patterns and descriptive statistics", body = AnalysisResponse),
        (status = 400, description = "A filter bound could not be parsed"),
        (status = 503, description = "Database unavailable", body = ErrorBody)
    ),
    summary = "Analysis of the filtered records"
)]
pub async fn get_analysis(
    State(state): State<AppState>,
    Query(filter): Query<FilterParams>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let (_, filtered) = load_filtered(&state, &filter).await?;
    let magnitudes: Vec<f64> = filtered.iter().map(|r| r.magnitude).collect();
    let depths: Vec<f64> = filtered.iter().map(|r| f64::from(r.depth)).collect();

    Ok(Json(AnalysisResponse {
        weekday: weekday_counts(&filtered),
        hourly: hourly_counts(&filtered),
        magnitude: DescriptiveStats::from_values(&magnitudes),
        depth: DescriptiveStats::from_values(&depths),
        magnitude_histogram: histogram(&magnitudes, MAGNITUDE_BINS),
        depth_histogram: histogram(&depths, DEPTH_BINS),
    }))
}

#[utoipa::path(
    get,
    path = "/top",
    params(FilterParams, TopQueryParams),
    responses(
        (status = 200, description = "Strongest filtered records, ties in catalog order", body = [Earthquake]),
        (status = 400, description = "Limit is not a positive integer", body = ErrorBody),
        (status = 503, description = "Database unavailable", body = ErrorBody)
    ),
    summary = "Strongest filtered records"
)]
pub async fn get_filtered_top(
    State(state): State<AppState>,
    Query(filter): Query<FilterParams>,
    Query(top): Query<TopQueryParams>,
) -> Result<Json<Vec<Earthquake>>, AppError> {
    let n = resolve_top_n(top.limit, state.config.top_n_limit)?;
    let (_, filtered) = load_filtered(&state, &filter).await?;
    let n = usize::try_from(n.get()).unwrap_or(usize::MAX);
    Ok(Json(top_by_magnitude(&filtered, n)))
}

#[utoipa::path(
    get,
    path = "/export",
    params(FilterParams, ExportParams),
    responses(
        (status = 200, description = "CSV of the filtered records", body = String, content_type = "text/csv"),
        (status = 400, description = "Unknown column or unparseable filter", body = ErrorBody),
        (status = 503, description = "Database unavailable", body = ErrorBody)
    ),
    summary = "Download filtered records as CSV"
)]
pub async fn export_csv(
    State(state): State<AppState>,
    Query(filter): Query<FilterParams>,
    Query(export): Query<ExportParams>,
) -> Result<Response, AppError> {
    let columns = ExportColumn::parse_selection(export.columns.as_deref())?;
    let (_, filtered) = load_filtered(&state, &filter).await?;
    let body = to_csv(&filtered, &columns)?;
    let filename = export_filename(chrono::Local::now().date_naive());
    info!(rows = filtered.len(), columns = columns.len(), %filename, "Exporting CSV");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response())
}
