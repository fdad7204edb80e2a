use std::{collections::HashSet, num::NonZeroU32};

use axum::http::{HeaderMap, HeaderValue};

use crate::server::{
    config::TokenConfig,
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, AuthRequirement, AUTH_TOKEN_HEADER},
    service::auth::TokenAuthenticator,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

const NOW: i64 = 1_700_000_000;

fn authenticator(security: bool) -> TokenAuthenticator {
    TokenAuthenticator::new(TokenConfig {
        secret: "change-me".to_string(),
        iv_seed: "iv-seed".to_string(),
        separator: '|',
        rounds: NonZeroU32::new(2).unwrap(),
        validity_seconds: Some(3600),
        security,
        unauthorized_profiles: HashSet::new(),
    })
}

fn headers_with_token(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTH_TOKEN_HEADER, HeaderValue::from_str(token).unwrap());
    headers
}
