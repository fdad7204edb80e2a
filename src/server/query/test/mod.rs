use std::collections::BTreeMap;

use sea_orm::{sea_query::SqliteQueryBuilder, Value};
use serde_json::{json, Map, Value as JsonValue};

use crate::server::{
    config::QueryConfig,
    error::query::QueryError,
    query::{
        assembler::QueryAssembler,
        criteria::CriteriaBuilder,
        predicate::{ColumnRef, Operator},
        registry::domain_registry,
        search::TextSearch,
        sort::SortParser,
        spec::{Direction, QuerySpec},
    },
};


/// Builds inclusion filters from literal pairs.
fn filters(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Unwraps a `json!` object literal into an `except` map.
fn except(value: JsonValue) -> Map<String, JsonValue> {
    match value {
        JsonValue::Object(map) => map,
        other => panic!("expected a JSON object, got {}", other),
    }
}
