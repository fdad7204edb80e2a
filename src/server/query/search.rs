//! Global free-text search across an entity and its direct to-one relations.
//!
//! Each scalar field contributes at most one predicate, chosen by its type. Fields the
//! text cannot be read as are skipped silently. Recursion stops after one level: the
//! relations of a related entity are never searched.

use chrono::{Duration, NaiveTime};
use sea_orm::Value;

use super::{
    criteria::relation_join,
    metadata::{EntityDescriptor, EntityRegistry, FieldKind, BASE_ALIAS},
    predicate::{ColumnRef, Predicate},
    spec::QueryFragment,
    value::{parse_date, parse_float, parse_integer, parse_time},
};
use crate::server::{config::QueryConfig, error::query::QueryError};

pub struct TextSearch<'r> {
    registry: &'r EntityRegistry,
    true_tokens: &'r [String],
    false_tokens: &'r [String],
}

impl<'r> TextSearch<'r> {
    /// Creates a generator reading boolean tokens from the query configuration.
    pub fn new(registry: &'r EntityRegistry, config: &'r QueryConfig) -> Self {
        Self {
            registry,
            true_tokens: &config.true_tokens,
            false_tokens: &config.false_tokens,
        }
    }

    /// Generates OR-combined predicates matching `text` on `entity`.
    ///
    /// A fresh fragment is built on every call. Joins are added only for relations
    /// that contributed at least one predicate.
    ///
    /// # Arguments
    /// - `entity` - Name of the base entity
    /// - `text` - Search text; surrounding whitespace is ignored
    ///
    /// # Returns
    /// - `Ok(QueryFragment)` - Empty when `text` is blank
    /// - `Err(QueryError::UnknownEntity)` - Entity or relation target not registered
    pub fn generate(&self, entity: &str, text: &str) -> Result<QueryFragment, QueryError> {
        let descriptor = self.registry.describe(entity)?;
        let text = text.trim();
        let mut fragment = QueryFragment::new();

        if text.is_empty() {
            return Ok(fragment);
        }

        fragment
            .predicates
            .extend(self.scalar_predicates(descriptor, BASE_ALIAS, text));

        for (relation, target) in descriptor.to_one_relations() {
            let target = self.registry.describe(target)?;
            let join = relation_join(descriptor, relation, target)?;

            let predicates = self.scalar_predicates(target, &join.alias, text);
            if predicates.is_empty() {
                continue;
            }

            fragment.joins.insert(join)?;
            fragment.predicates.extend(predicates);
        }

        Ok(fragment)
    }

    fn scalar_predicates(&self, descriptor: &EntityDescriptor, alias: &str, text: &str) -> Vec<Predicate> {
        descriptor
            .scalar_fields()
            .filter_map(|(field, kind)| {
                let column = ColumnRef::new(alias, field.column?);
                self.predicate_for(kind, column, text)
            })
            .collect()
    }

    fn predicate_for(&self, kind: FieldKind, column: ColumnRef, text: &str) -> Option<Predicate> {
        match kind {
            FieldKind::Integer => parse_integer(text).map(|n| Predicate::equals(column, Value::from(n))),
            FieldKind::Float => parse_float(text).map(|n| Predicate::equals(column, Value::from(n))),
            FieldKind::Boolean => self
                .boolean_token(text)
                .map(|b| Predicate::equals(column, Value::from(b))),
            FieldKind::Date => {
                let day = parse_date(text)?;
                let next = day.succ_opt()?;
                Some(Predicate::between(column, Value::from(day), Value::from(next)))
            }
            FieldKind::DateTime => {
                let start = parse_date(text)?.and_hms_opt(0, 0, 0)?;
                let end = start + Duration::days(1);
                Some(Predicate::between(column, Value::from(start), Value::from(end)))
            }
            FieldKind::Time => {
                let (start, end) = minute_window(parse_time(text)?);
                Some(Predicate::between(column, Value::from(start), Value::from(end)))
            }
            FieldKind::String => Some(Predicate::contains(column, text)),
        }
    }

    fn boolean_token(&self, text: &str) -> Option<bool> {
        let text = text.to_lowercase();

        if self.true_tokens.iter().any(|token| *token == text) {
            Some(true)
        } else if self.false_tokens.iter().any(|token| *token == text) {
            Some(false)
        } else {
            None
        }
    }
}

/// One-minute window starting at `start`, ending at the last instant of the day when
/// the minute would wrap past midnight.
fn minute_window(start: NaiveTime) -> (NaiveTime, NaiveTime) {
    let (end, wrapped) = start.overflowing_add_signed(Duration::minutes(1));

    if wrapped != 0 {
        let last = NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap_or(start);
        (start, last)
    } else {
        (start, end)
    }
}
