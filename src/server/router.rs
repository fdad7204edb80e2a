use axum::{
    http::{header::CONTENT_TYPE, HeaderName, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::server::{
    controller::{auth::token_validity, list::list},
    middleware::auth::AUTH_TOKEN_HEADER,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static(AUTH_TOKEN_HEADER)]);

    Router::new()
        .route("/api/token-validity", get(token_validity))
        .route("/api/{resource}", get(list))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
