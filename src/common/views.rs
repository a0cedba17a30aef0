use super::models::HealthCheck;
use super::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use tracing::{error, info};
use utoipa_axum::{router::OpenApiRouter, routes};

pub fn router(state: &AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(healthz))
        .with_state(state.clone())
}

#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = OK, description = "Database reachable", body = HealthCheck),
        (status = INTERNAL_SERVER_ERROR, description = "Database unreachable", body = HealthCheck)
    )
)]
pub async fn healthz(State(app_state): State<AppState>) -> (StatusCode, Json<HealthCheck>) {
    let db = &app_state.db;
    let now = chrono::Utc::now();
    if let Err(e) = db.ping().await {
        error!(
            timestamp = %now.format("%Y-%m-%d %H:%M:%S"),
            endpoint = "healthz",
            status = 500,
            error = %e,
            "Database connection FAILED"
        );
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(HealthCheck {
                status: "error".to_string(),
            }),
        );
    }
    info!(
        timestamp = %now.format("%Y-%m-%d %H:%M:%S"),
        endpoint = "healthz",
        status = 200,
        "Database connection is healthy"
    );
    (
        StatusCode::OK,
        Json(HealthCheck {
            status: "ok".to_string(),
        }),
    )
}
