use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use crate::export::ExportError;
use sea_orm::DbErr;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database unavailable: {0}")]
    Connection(DbErr),

    #[error("Query failed: {0}")]
    Query(DbErr),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Export failed: {0}")]
    Export(String),
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => AppError::Connection(err),
            other => AppError::Query(other),
        }
    }
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::UnknownColumn(_) | ExportError::NoColumns => {
                AppError::InvalidParameter(err.to_string())
            }
            other => AppError::Export(other.to_string()),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Connection(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Query(_) | AppError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, status = status.as_u16(), "Request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
