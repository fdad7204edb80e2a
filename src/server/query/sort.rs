use super::{
    criteria::relation_join,
    metadata::{EntityDescriptor, EntityRegistry, FieldType, BASE_ALIAS},
    predicate::ColumnRef,
    spec::{Direction, SortKey, SortSpec},
};
use crate::server::error::query::QueryError;

/// Parser for `orderBy` expressions such as `nom ASC, societe.ville DESC`.
pub struct SortParser<'r> {
    registry: &'r EntityRegistry,
}

impl<'r> SortParser<'r> {
    pub fn new(registry: &'r EntityRegistry) -> Self {
        Self { registry }
    }

    /// Parses a comma-separated list of `path direction` clauses.
    ///
    /// `path` is a field of the entity or `relation.field` on a to-one relation, which
    /// adds a join. `direction` is ASC or DESC in any case. A blank expression yields
    /// no keys.
    ///
    /// # Returns
    /// - `Ok(SortSpec)` - Keys in expression order and the joins they need
    /// - `Err(QueryError::UnknownEntity)` - Entity not registered
    /// - `Err(QueryError::InvalidSortExpression)` - Malformed clause or unknown path
    pub fn parse(&self, entity: &str, expression: &str) -> Result<SortSpec, QueryError> {
        let descriptor = self.registry.describe(entity)?;
        let mut sort = SortSpec::default();

        if expression.trim().is_empty() {
            return Ok(sort);
        }

        for clause in expression.split(',') {
            let tokens: Vec<&str> = clause.split_whitespace().collect();
            let [path, direction] = tokens[..] else {
                return Err(invalid(clause, "expected `field direction`"));
            };

            let direction = match direction.to_ascii_uppercase().as_str() {
                "ASC" => Direction::Asc,
                "DESC" => Direction::Desc,
                _ => return Err(invalid(clause, "direction must be ASC or DESC")),
            };

            let column = match path.split('.').collect::<Vec<_>>()[..] {
                [field] => local_column(descriptor, field, BASE_ALIAS)
                    .ok_or_else(|| invalid(clause, "unknown field"))?,
                [relation, field] => {
                    let relation = descriptor
                        .field(relation)
                        .filter(|r| matches!(r.ty, FieldType::ToOne { .. }))
                        .ok_or_else(|| invalid(clause, "unknown to-one relation"))?;
                    let FieldType::ToOne { target } = relation.ty else {
                        return Err(invalid(clause, "unknown to-one relation"));
                    };

                    let target = self.registry.describe(target)?;
                    let join = relation_join(descriptor, relation, target)?;
                    let column = local_column(target, field, &join.alias)
                        .ok_or_else(|| invalid(clause, "unknown field on relation"))?;

                    sort.joins.insert(join)?;
                    column
                }
                _ => return Err(invalid(clause, "at most one relation level is allowed")),
            };

            sort.keys.push(SortKey {
                path: path.to_string(),
                column,
                direction,
            });
        }

        Ok(sort)
    }
}

/// Column of a stored field; to-many relations have none.
fn local_column(descriptor: &EntityDescriptor, name: &str, alias: &str) -> Option<ColumnRef> {
    descriptor
        .field(name)
        .and_then(|field| field.column)
        .map(|column| ColumnRef::new(alias, column))
}

fn invalid(clause: &str, reason: &str) -> QueryError {
    QueryError::InvalidSortExpression(format!("'{}': {}", clause.trim(), reason))
}
