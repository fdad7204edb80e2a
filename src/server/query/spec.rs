//! Per-request query description: joins, predicate groups, sort and window.

use sea_orm::Order;

use super::{
    metadata::{EntityDescriptor, BASE_ALIAS},
    predicate::{ColumnRef, Predicate},
};
use crate::server::error::query::QueryError;

/// Left join from the base entity to a to-one relation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinSpec {
    /// Relation field on the base entity.
    pub relation: &'static str,
    pub target_entity: &'static str,
    pub target_table: &'static str,
    pub alias: String,
    /// Foreign key column on the base entity.
    pub from_column: &'static str,
    /// Identifier column on the target.
    pub to_column: &'static str,
}

/// Joins keyed by alias, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinSet {
    joins: Vec<JoinSpec>,
}

impl JoinSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a join, reusing an existing join for the same relation.
    ///
    /// # Returns
    /// - `Ok(())` - Join added or already present
    /// - `Err(QueryError::JoinAliasConflict)` - Alias already bound to another relation
    pub fn insert(&mut self, join: JoinSpec) -> Result<(), QueryError> {
        if let Some(existing) = self.joins.iter().find(|j| j.alias == join.alias) {
            if existing.relation == join.relation && existing.target_table == join.target_table {
                return Ok(());
            }

            return Err(QueryError::JoinAliasConflict {
                alias: join.alias,
                existing: existing.relation.to_string(),
                requested: join.relation.to_string(),
            });
        }

        self.joins.push(join);
        Ok(())
    }

    pub fn merge(&mut self, other: JoinSet) -> Result<(), QueryError> {
        other.joins.into_iter().try_for_each(|join| self.insert(join))
    }

    pub fn contains_alias(&self, alias: &str) -> bool {
        self.joins.iter().any(|join| join.alias == alias)
    }

    pub fn iter(&self) -> impl Iterator<Item = &JoinSpec> {
        self.joins.iter()
    }

    pub fn len(&self) -> usize {
        self.joins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joins.is_empty()
    }
}

/// Predicates plus the joins they need.
///
/// Whether the predicates are AND- or OR-combined is decided by whoever merges the
/// fragment into a `QuerySpec`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryFragment {
    pub predicates: Vec<Predicate>,
    pub joins: JoinSet,
}

impl QueryFragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty() && self.joins.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl From<Direction> for Order {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Asc => Order::Asc,
            Direction::Desc => Order::Desc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    /// Path as written by the caller, `field` or `relation.field`.
    pub path: String,
    pub column: ColumnRef,
    pub direction: Direction,
}

/// Parsed sort keys plus the joins they need.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub keys: Vec<SortKey>,
    pub joins: JoinSet,
}

/// Everything needed to assemble the data and count statements of one listing.
#[derive(Debug, Clone)]
pub struct QuerySpec<'r> {
    pub base: &'r EntityDescriptor,
    /// AND-combined predicates (inclusion, exclusion, custom criteria).
    pub and_group: Vec<Predicate>,
    /// OR-combined predicates from text search. `Some(vec![])` matches nothing.
    pub or_group: Option<Vec<Predicate>>,
    pub joins: JoinSet,
    pub sort: Vec<SortKey>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl<'r> QuerySpec<'r> {
    pub fn new(base: &'r EntityDescriptor) -> Self {
        Self {
            base,
            and_group: Vec::new(),
            or_group: None,
            joins: JoinSet::new(),
            sort: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    /// Appends AND-combined predicates and their joins.
    pub fn and(&mut self, fragment: QueryFragment) -> Result<(), QueryError> {
        self.joins.merge(fragment.joins)?;
        self.and_group.extend(fragment.predicates);
        Ok(())
    }

    /// Appends OR-combined predicates and their joins.
    ///
    /// The OR-group is created even when the fragment has no predicates, so a search
    /// that no field can satisfy yields no rows.
    pub fn or(&mut self, fragment: QueryFragment) -> Result<(), QueryError> {
        self.joins.merge(fragment.joins)?;
        self.or_group
            .get_or_insert_with(Vec::new)
            .extend(fragment.predicates);
        Ok(())
    }

    pub fn sort_by(&mut self, sort: SortSpec) -> Result<(), QueryError> {
        self.joins.merge(sort.joins)?;
        self.sort.extend(sort.keys);
        Ok(())
    }

    pub fn window(&mut self, limit: u64, offset: u64) {
        self.limit = Some(limit);
        self.offset = Some(offset);
    }

    /// Checks that every referenced alias is the base alias or a joined alias.
    ///
    /// # Returns
    /// - `Ok(())` - All references resolve
    /// - `Err(QueryError::UnresolvedJoin)` - First alias with no join
    pub fn validate(&self) -> Result<(), QueryError> {
        let predicates = self
            .and_group
            .iter()
            .chain(self.or_group.iter().flatten())
            .map(Predicate::column);
        let sort = self.sort.iter().map(|key| &key.column);

        for column in predicates.chain(sort) {
            if column.alias != BASE_ALIAS && !self.joins.contains_alias(&column.alias) {
                return Err(QueryError::UnresolvedJoin(column.alias.clone()));
            }
        }

        Ok(())
    }
}
