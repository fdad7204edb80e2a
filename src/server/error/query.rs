use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised while turning list parameters into a query and running it.
///
/// Everything except `QueryExecutionFailed` describes a problem with the caller's
/// parameters and is reported back verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error("Unknown entity: {0}")]
    UnknownEntity(String),

    #[error("Unknown field '{field}' on entity {entity}")]
    UnknownField { entity: String, field: String },

    /// The supplied value does not have the shape of the field's semantic type.
    #[error("Value for field '{field}' does not match its type: {reason}")]
    TypeMismatch { field: String, reason: String },

    #[error("Exclusion on field '{0}' must not be an empty set")]
    InvalidExclusionValue(String),

    #[error("Field '{0}' cannot be used as an exclusion filter")]
    UnsupportedExclusionField(String),

    #[error("Field '{0}' cannot be used as a filter")]
    UnsupportedFilterField(String),

    #[error("Invalid sort expression: {0}")]
    InvalidSortExpression(String),

    #[error("The except parameter must be a JSON object: {0}")]
    InvalidExceptParameter(String),

    #[error("Invalid pagination parameter: {0}")]
    InvalidPagination(String),

    /// Two different relations were assigned the same join alias in one query.
    #[error("Join alias '{alias}' is already bound to relation '{existing}', cannot bind '{requested}'")]
    JoinAliasConflict {
        alias: String,
        existing: String,
        requested: String,
    },

    /// A predicate or sort key references an alias with no join in the query.
    #[error("Alias '{0}' is referenced but not joined")]
    UnresolvedJoin(String),

    /// Database failure or timeout. The message is logged, never returned.
    #[error("Query execution failed: {0}")]
    QueryExecutionFailed(String),
}

/// Converts query errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For `UnknownEntity`
/// - 500 Internal Server Error - For `QueryExecutionFailed`, with a generic message
/// - 400 Bad Request - For every parameter error
impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::UnknownEntity(_) => StatusCode::NOT_FOUND,
            Self::QueryExecutionFailed(ref reason) => {
                tracing::error!("Query execution failed: {}", reason);

                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response();
            }
            // Internal invariant violations surface as 500 as well
            Self::JoinAliasConflict { .. } | Self::UnresolvedJoin(_) => {
                tracing::error!("{}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
