//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("product {0} not found")]
    NotFound(i32),
    /// More than one row under a single id. The primary key should make this
    /// impossible; if it happens the data is corrupt and we refuse to pick one.
    #[error("multiple rows share id {0}")]
    Integrity(i32),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            AppError::Integrity(id) => {
                tracing::error!(id, "duplicate rows under one id");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            AppError::Db(e) => {
                tracing::error!(error = %e, "database error");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
