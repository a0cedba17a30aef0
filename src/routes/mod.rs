pub mod dashboard;
pub mod earthquakes;
pub mod statistics;

use crate::common::state::AppState;
use axum::{Router, http::Method};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

pub fn build_router(app_state: &AppState) -> Router {
    #[derive(OpenApi)]
    #[openapi(info(
        title = "Earthquake catalog API",
        description = "Read-only access to the regional earthquake catalog and its dashboard aggregates"
    ))]
    struct ApiDoc;

    // The dashboard is served from another origin and only reads
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any);

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(crate::common::views::router(app_state)) // Root routes
        .nest("/api/catalog", earthquakes::views::router(app_state))
        .nest("/api/statistics", statistics::views::router(app_state))
        .nest("/api/dashboard", dashboard::views::router(app_state))
        .layer(cors)
        .split_for_parts();

    router.merge(Scalar::with_url("/api/docs", api))
}
