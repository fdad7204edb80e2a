use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::auth::TokenValidityDto,
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, AuthRequirement},
        state::AppState,
    },
};

/// GET /api/token-validity - Check the caller's token
///
/// # Authentication
/// Requires a valid token in the `X-AUTH-TOKEN` header
///
/// # Returns
/// - `200 OK`: `{"tokenValidity": true}`
/// - `401 Unauthorized`: Token missing, invalid, expired or unknown
/// - `403 Forbidden`: Profile denied
pub async fn token_validity(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.authenticator, &state.db, &headers);
    let _caller = auth_guard.require(AuthRequirement::Required).await?;

    Ok((
        StatusCode::OK,
        Json(TokenValidityDto {
            token_validity: true,
        }),
    ))
}
