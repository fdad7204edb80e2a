use std::{collections::HashSet, num::NonZeroU32};

use crate::server::{
    config::TokenConfig, error::auth::AuthError, service::auth::TokenAuthenticator,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod authenticate;

const NOW: i64 = 1_700_000_000;

fn token_config(unauthorized_profiles: HashSet<i32>) -> TokenConfig {
    TokenConfig {
        secret: "change-me".to_string(),
        iv_seed: "iv-seed".to_string(),
        separator: '|',
        rounds: NonZeroU32::new(2).unwrap(),
        validity_seconds: Some(3600),
        security: true,
        unauthorized_profiles,
    }
}
