use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::server::{
    error::AppError,
    middleware::auth::{AuthGuard, AuthRequirement},
    model::list::ListParams,
    service::listing::ListService,
    state::AppState,
};

/// GET /api/{resource} - List any registered entity
///
/// # Authentication
/// Requires a valid token in the `X-AUTH-TOKEN` header
///
/// # Query Parameters
/// - `page`, `limit`: Page window; omit both for an unpaginated listing
/// - `orderBy`: Sort expression, e.g. `nom ASC, societe.ville DESC`
/// - `filter_text`: Free-text search
/// - `except`: JSON object of exclusion filters
/// - Any other key: Inclusion filter on that field
///
/// # Returns
/// - `200 OK`: `{}` when nothing matches, else `{results, paginator?}`
/// - `400 Bad Request`: Invalid filter, sort, pagination or `except` value
/// - `401 Unauthorized` / `403 Forbidden`: Authentication failed
/// - `404 Not Found`: Unknown resource
/// - `500 Internal Server Error`: Query failed or timed out
pub async fn list(
    State(state): State<AppState>,
    Path(resource): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.authenticator, &state.db, &headers);
    let caller = auth_guard.require(AuthRequirement::Required).await?;

    let params = ListParams::from_query(query, state.query.default_page_size)?;

    let list_service = ListService::new(&state.db, &state.registry, &state.query);
    let result = list_service.list(&resource, params).await?;

    tracing::debug!(
        "{} listed {}: {} of {} rows",
        caller
            .as_ref()
            .map_or("anonymous", |identity| identity.login.as_str()),
        resource,
        result.rows.len(),
        result.total
    );

    Ok((StatusCode::OK, Json(result.into_dto())))
}
