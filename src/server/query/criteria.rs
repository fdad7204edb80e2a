//! Inclusion and exclusion filters.
//!
//! Inclusion filters arrive as raw query-string text; exclusion filters arrive as the
//! decoded JSON object of the `except` parameter. Both produce AND-combined predicates.

use std::collections::BTreeMap;

use sea_orm::Value;
use serde_json::{Map, Value as JsonValue};

use super::{
    metadata::{EntityDescriptor, EntityRegistry, FieldDescriptor, FieldKind, FieldType, BASE_ALIAS},
    predicate::{ColumnRef, Predicate},
    spec::{JoinSpec, QueryFragment},
    value::{coerce_text, parse_date, parse_datetime, parse_time},
};
use crate::server::error::query::QueryError;

/// Suffix naming a relation by its foreign key, e.g. `societe_id`.
const RELATION_ID_SUFFIX: &str = "_id";

/// Field resolved from a filter key, possibly on a joined relation.
struct ResolvedField {
    field: &'static FieldDescriptor,
    alias: String,
    join: Option<JoinSpec>,
}

impl ResolvedField {
    fn column(&self) -> Option<ColumnRef> {
        self.field
            .column
            .map(|column| ColumnRef::new(self.alias.clone(), column))
    }
}

pub struct CriteriaBuilder<'r> {
    registry: &'r EntityRegistry,
}

impl<'r> CriteriaBuilder<'r> {
    pub fn new(registry: &'r EntityRegistry) -> Self {
        Self { registry }
    }

    /// Builds equality filters from `field=value` pairs.
    ///
    /// - A key ending in `_id` that is not a field itself names the relation.
    /// - A key `relation.field` filters on a to-one relation through a join.
    /// - A comma-separated value becomes IN over its trimmed, non-empty tokens.
    /// - Any other value becomes EQ.
    /// - Empty values are ignored.
    ///
    /// Values are coerced to the field's type and bound as parameters. Relations
    /// compare their foreign key against integer ids.
    ///
    /// # Arguments
    /// - `entity` - Name of the base entity
    /// - `filters` - Field/value pairs from the query string
    ///
    /// # Returns
    /// - `Ok(QueryFragment)` - Predicates to AND-combine and the joins they need
    /// - `Err(QueryError)` - Unknown entity or field, to-many field, or unparsable value
    pub fn build_inclusion(
        &self,
        entity: &str,
        filters: &BTreeMap<String, String>,
    ) -> Result<QueryFragment, QueryError> {
        let descriptor = self.registry.describe(entity)?;
        let mut fragment = QueryFragment::new();

        for (key, raw) in filters {
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }

            let resolved = self.resolve(descriptor, key)?;
            let kind = match resolved.field.ty {
                FieldType::Scalar(kind) => kind,
                FieldType::ToOne { .. } => FieldKind::Integer,
                FieldType::ToMany { .. } => {
                    return Err(QueryError::UnsupportedFilterField(key.clone()))
                }
            };
            let Some(column) = resolved.column() else {
                return Err(QueryError::UnsupportedFilterField(key.clone()));
            };

            let coerce = |token: &str| {
                coerce_text(kind, token).ok_or_else(|| QueryError::TypeMismatch {
                    field: key.clone(),
                    reason: format!("{:?} is not a valid {:?}", token, kind),
                })
            };

            let predicate = if raw.contains(',') {
                let values = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|token| !token.is_empty())
                    .map(coerce)
                    .collect::<Result<Vec<_>, _>>()?;

                match Predicate::in_set(column, values) {
                    Some(predicate) => predicate,
                    None => continue,
                }
            } else {
                Predicate::equals(column, coerce(raw)?)
            };

            if let Some(join) = resolved.join {
                fragment.joins.insert(join)?;
            }
            fragment.predicates.push(predicate);
        }

        Ok(fragment)
    }

    /// Builds negated filters from the `except` JSON object.
    ///
    /// Per field, in this order:
    /// 1. The field must exist, else `UnknownField`.
    /// 2. An empty array fails `InvalidExclusionValue` whatever the field type.
    /// 3. To-many relations fail `UnsupportedExclusionField`.
    /// 4. An object is ignored and contributes no predicate.
    /// 5. `null` gives IS NOT NULL, a scalar gives NEQ, an array gives NOT IN.
    ///
    /// To-one relations accept integer ids only. Scalars must match the field type:
    /// booleans for boolean fields, integers for integer fields, any number for float
    /// fields, and strings for string, date, datetime and time fields (temporal strings
    /// in ISO form). Arrays must be homogeneous in that same shape.
    ///
    /// # Arguments
    /// - `entity` - Name of the base entity
    /// - `exclusions` - Decoded `except` object
    ///
    /// # Returns
    /// - `Ok(QueryFragment)` - Predicates to AND-combine (no joins)
    /// - `Err(QueryError)` - First field that violates the rules above
    pub fn build_exclusion(
        &self,
        entity: &str,
        exclusions: &Map<String, JsonValue>,
    ) -> Result<QueryFragment, QueryError> {
        let descriptor = self.registry.describe(entity)?;
        let mut fragment = QueryFragment::new();

        for (key, value) in exclusions {
            let field = resolve_local(descriptor, key)?;

            if matches!(value, JsonValue::Array(items) if items.is_empty()) {
                return Err(QueryError::InvalidExclusionValue(key.clone()));
            }

            let kind = match field.ty {
                FieldType::Scalar(kind) => kind,
                FieldType::ToOne { .. } => FieldKind::Integer,
                FieldType::ToMany { .. } => {
                    return Err(QueryError::UnsupportedExclusionField(key.clone()))
                }
            };
            let Some(column) = field.column else {
                return Err(QueryError::UnsupportedExclusionField(key.clone()));
            };
            let column = ColumnRef::new(BASE_ALIAS, column);

            let predicate = match value {
                JsonValue::Object(_) => continue,
                JsonValue::Null => Predicate::is_not_null(column),
                JsonValue::Array(items) => {
                    let values = items
                        .iter()
                        .map(|item| json_to_value(key, kind, item))
                        .collect::<Result<Vec<_>, _>>()?;

                    Predicate::not_in_set(column, values)
                        .ok_or_else(|| QueryError::InvalidExclusionValue(key.clone()))?
                }
                scalar => Predicate::not_equals(column, json_to_value(key, kind, scalar)?),
            };

            fragment.predicates.push(predicate);
        }

        Ok(fragment)
    }

    /// Resolves a filter key to a field of the base entity or of a to-one relation.
    fn resolve(&self, descriptor: &EntityDescriptor, key: &str) -> Result<ResolvedField, QueryError> {
        let Some((relation_name, field_name)) = key.split_once('.') else {
            return Ok(ResolvedField {
                field: resolve_local(descriptor, key)?,
                alias: BASE_ALIAS.to_string(),
                join: None,
            });
        };

        let relation = descriptor
            .field(relation_name)
            .ok_or_else(|| descriptor.unknown_field(key))?;
        let FieldType::ToOne { target } = relation.ty else {
            return Err(QueryError::UnsupportedFilterField(key.to_string()));
        };

        let target = self.registry.describe(target)?;
        let field = target
            .field(field_name)
            .ok_or_else(|| target.unknown_field(field_name))?;
        let join = relation_join(descriptor, relation, target)?;

        Ok(ResolvedField {
            field,
            alias: join.alias.clone(),
            join: Some(join),
        })
    }
}

/// Resolves a key on the entity itself, accepting the `<relation>_id` spelling.
fn resolve_local(
    descriptor: &EntityDescriptor,
    key: &str,
) -> Result<&'static FieldDescriptor, QueryError> {
    if let Some(field) = descriptor.field(key) {
        return Ok(field);
    }

    key.strip_suffix(RELATION_ID_SUFFIX)
        .and_then(|relation| descriptor.field(relation))
        .filter(|field| matches!(field.ty, FieldType::ToOne { .. }))
        .ok_or_else(|| descriptor.unknown_field(key))
}

/// Builds the join from `base` to the target of one of its to-one relations.
pub(crate) fn relation_join(
    base: &EntityDescriptor,
    relation: &FieldDescriptor,
    target: &EntityDescriptor,
) -> Result<JoinSpec, QueryError> {
    let (Some(alias), Some(from_column)) = (base.join_alias(relation.name), relation.column) else {
        return Err(base.unknown_field(relation.name));
    };

    Ok(JoinSpec {
        relation: relation.name,
        target_entity: target.name(),
        target_table: target.table(),
        alias: alias.to_string(),
        from_column,
        to_column: target.id(),
    })
}

/// Converts one JSON exclusion value into a bound value of `kind`.
fn json_to_value(field: &str, kind: FieldKind, value: &JsonValue) -> Result<Value, QueryError> {
    let converted = match (kind, value) {
        (FieldKind::Boolean, JsonValue::Bool(b)) => Some(Value::from(*b)),
        (FieldKind::Integer, JsonValue::Number(n)) => n.as_i64().map(Value::from),
        (FieldKind::Float, JsonValue::Number(n)) => n.as_f64().map(Value::from),
        (FieldKind::String, JsonValue::String(s)) => Some(Value::from(s.clone())),
        (FieldKind::Date, JsonValue::String(s)) => parse_date(s).map(Value::from),
        (FieldKind::DateTime, JsonValue::String(s)) => parse_datetime(s).map(Value::from),
        (FieldKind::Time, JsonValue::String(s)) => parse_time(s).map(Value::from),
        _ => None,
    };

    converted.ok_or_else(|| QueryError::TypeMismatch {
        field: field.to_string(),
        reason: format!("{} is not a valid {:?}", value, kind),
    })
}
