use std::collections::HashMap;

use crate::server::{
    config::QueryConfig,
    error::query::QueryError,
    model::list::{ListParams, PageResult},
    query::registry::domain_registry,
    service::listing::ListService,
};
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod filter;
mod paginate;
mod search;

/// Decodes literal query-string pairs with the default page size.
fn params(pairs: &[(&str, &str)]) -> ListParams {
    let query: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    ListParams::from_query(query, QueryConfig::default().default_page_size).unwrap()
}

/// Runs one listing against `db` with the domain registry and default settings.
async fn list(
    db: &DatabaseConnection,
    resource: &str,
    pairs: &[(&str, &str)],
) -> Result<PageResult, QueryError> {
    let registry = domain_registry();
    let config = QueryConfig::default();

    ListService::new(db, &registry, &config)
        .list(resource, params(pairs))
        .await
}

fn ids(result: &PageResult) -> Vec<serde_json::Value> {
    result.rows.iter().map(|row| row["id"].clone()).collect()
}
