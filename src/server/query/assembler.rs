//! Turns a `QuerySpec` into executable sea-query statements.

use sea_orm::{
    sea_query::{Alias, Condition, Expr, ExprTrait, Func, JoinType, Query, SelectStatement},
    Order,
};

use super::{
    metadata::{EntityDescriptor, BASE_ALIAS},
    predicate::ColumnRef,
    spec::QuerySpec,
};
use crate::server::error::query::QueryError;

/// Alias of the count column.
pub const COUNT_ALIAS: &str = "total";

/// Statements for one listing.
#[derive(Debug, Clone)]
pub struct AssembledQuery {
    pub data: SelectStatement,
    /// Present only when the listing is paginated.
    pub count: Option<SelectStatement>,
}

pub struct QueryAssembler;

impl QueryAssembler {
    /// Assembles the data statement and, when `with_count` is set, a count statement
    /// sharing its joins and filter.
    ///
    /// Every join is a LEFT JOIN so rows with an unset relation are kept. Rows are
    /// ordered by the requested sort keys followed by the base identifier, which keeps
    /// pages stable when sort keys tie.
    ///
    /// # Returns
    /// - `Ok(AssembledQuery)` - Ready-to-run statements
    /// - `Err(QueryError::UnresolvedJoin)` - A column references an alias it does not join
    pub fn assemble(spec: &QuerySpec<'_>, with_count: bool) -> Result<AssembledQuery, QueryError> {
        spec.validate()?;

        let base = Self::base_select(spec);

        let count = with_count.then(|| {
            let mut count = base.clone();
            count.expr_as(
                Func::count(ColumnRef::new(BASE_ALIAS, spec.base.id()).expr()),
                Alias::new(COUNT_ALIAS),
            );
            count
        });

        let mut data = base;
        for field in spec.base.fields() {
            if let Some(column) = field.column {
                data.expr_as(ColumnRef::new(BASE_ALIAS, column).expr(), Alias::new(field.name));
            }
        }

        let mut sorted_by_id = false;
        for key in &spec.sort {
            sorted_by_id |= key.column.alias == BASE_ALIAS && key.column.column == spec.base.id();
            data.order_by(key.column.qualified(), Order::from(key.direction));
        }
        if !sorted_by_id {
            data.order_by(id_column(spec.base).qualified(), Order::Asc);
        }

        if let Some(limit) = spec.limit {
            data.limit(limit);
        }
        if let Some(offset) = spec.offset {
            data.offset(offset);
        }

        Ok(AssembledQuery { data, count })
    }

    /// FROM, joins and WHERE shared by the data and count statements.
    fn base_select(spec: &QuerySpec<'_>) -> SelectStatement {
        let mut select = Query::select();
        select.from_as(Alias::new(spec.base.table()), Alias::new(BASE_ALIAS));

        for join in spec.joins.iter() {
            let from = ColumnRef::new(BASE_ALIAS, join.from_column).expr();
            let to = ColumnRef::new(join.alias.clone(), join.to_column).expr();

            select.join_as(
                JoinType::LeftJoin,
                Alias::new(join.target_table),
                Alias::new(join.alias.clone()),
                from.eq(to),
            );
        }

        select.cond_where(Self::filter(spec));
        select
    }

    fn filter(spec: &QuerySpec<'_>) -> Condition {
        let mut condition = spec
            .and_group
            .iter()
            .fold(Condition::all(), |condition, predicate| {
                condition.add(predicate.to_condition())
            });

        match &spec.or_group {
            Some(group) if group.is_empty() => {
                condition = condition.add(Expr::cust("1=0"));
            }
            Some(group) => {
                condition = condition.add(
                    group
                        .iter()
                        .fold(Condition::any(), |any, predicate| any.add(predicate.to_condition())),
                );
            }
            None => {}
        }

        condition
    }
}

fn id_column(descriptor: &EntityDescriptor) -> ColumnRef {
    ColumnRef::new(BASE_ALIAS, descriptor.id())
}
