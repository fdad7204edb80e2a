use crate::server::{
    data::record::RecordRepository,
    query::{assembler::QueryAssembler, registry::domain_registry, sort::SortParser, spec::QuerySpec},
};
use sea_orm::DbErr;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod count;
mod fetch;
