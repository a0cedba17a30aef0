use super::models::MonthlyStatistic;
use crate::common::{error::AppError, models::ErrorBody, state::AppState};
use crate::repository::CatalogRepository;
use axum::{Json, extract::State};
use utoipa_axum::{router::OpenApiRouter, routes};

pub fn router(state: &AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(get_monthly_statistics))
        .with_state(state.clone())
}

#[utoipa::path(
    get,
    path = "/monthly",
    responses(
        (status = 200, description = "Per-month event count and magnitude range, newest month first", body = [MonthlyStatistic]),
        (status = 503, description = "Database unavailable", body = ErrorBody)
    ),
    summary = "Monthly statistics"
)]
pub async fn get_monthly_statistics(
    State(state): State<AppState>,
) -> Result<Json<Vec<MonthlyStatistic>>, AppError> {
    Ok(Json(state.db.fetch_monthly_statistics().await?))
}
