//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type returned by controllers. It wraps the
//! domain-specific errors and implements `IntoResponse` so handlers can use `?`.

pub mod auth;
pub mod config;
pub mod query;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, query::QueryError},
};

/// Top-level application error type.
///
/// Domain errors (`AuthError`, `QueryError`) handle their own response mapping; the
/// remaining variants are reported as 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` (401 or 403).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Invalid list parameters or failed list query.
    ///
    /// Delegates to `QueryError::into_response()`.
    #[error(transparent)]
    QueryErr(#[from] QueryError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Listener or server I/O error during startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - Variable - For `AuthErr` and `QueryErr`, delegated to the wrapped error
/// - 500 Internal Server Error - For all other error types (DbErr, ConfigErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::QueryErr(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
