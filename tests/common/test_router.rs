// Test-specific router builder

use axum::Router;
use quake_catalog_api::{common::state::AppState, config::Config, routes::build_router};
use sea_orm::DatabaseConnection;

/// Build the production router over a test database and test config
pub fn build_test_router(db: &DatabaseConnection, config: &Config) -> Router {
    let app_state = AppState::new(db.clone(), config.clone());
    build_router(&app_state)
}
