//! Single boolean comparisons contributed to a query's filter.
//!
//! Values are always carried as bound `sea_orm::Value`s; nothing a caller supplies is
//! ever spliced into SQL text.

use sea_orm::{
    sea_query::{extension::sqlite::SqliteExpr, Alias, Condition, Expr, ExprTrait},
    Value,
};

/// Column qualified by the alias of the table it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    pub alias: String,
    pub column: &'static str,
}

impl ColumnRef {
    pub fn new(alias: impl Into<String>, column: &'static str) -> Self {
        Self {
            alias: alias.into(),
            column,
        }
    }

    /// `(alias, column)` pair accepted wherever sea-query takes a column reference.
    pub fn qualified(&self) -> (Alias, Alias) {
        (Alias::new(self.alias.clone()), Alias::new(self.column))
    }

    pub fn expr(&self) -> Expr {
        Expr::col(self.qualified())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Neq,
    In,
    NotIn,
    /// Case-insensitive substring match.
    Like,
    Between,
    IsNull,
    IsNotNull,
}

#[derive(Debug, Clone, PartialEq)]
enum Operand {
    None,
    Single(Value),
    Set(Vec<Value>),
    /// Half-open range: `start <= column < end`.
    Range(Value, Value),
    /// `*text*` GLOB pattern with case-folded character classes.
    Pattern(String),
}

/// A comparison between a column and bound values.
///
/// Constructors enforce the operand shape of each operator: sets are never empty,
/// ranges always have two bounds, and substring patterns are already case-folded.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    column: ColumnRef,
    operator: Operator,
    operand: Operand,
}

impl Predicate {
    pub fn equals(column: ColumnRef, value: Value) -> Self {
        Self {
            column,
            operator: Operator::Eq,
            operand: Operand::Single(value),
        }
    }

    pub fn not_equals(column: ColumnRef, value: Value) -> Self {
        Self {
            column,
            operator: Operator::Neq,
            operand: Operand::Single(value),
        }
    }

    /// IN predicate, or `None` when `values` is empty.
    pub fn in_set(column: ColumnRef, values: Vec<Value>) -> Option<Self> {
        (!values.is_empty()).then(|| Self {
            column,
            operator: Operator::In,
            operand: Operand::Set(values),
        })
    }

    /// NOT IN predicate, or `None` when `values` is empty.
    pub fn not_in_set(column: ColumnRef, values: Vec<Value>) -> Option<Self> {
        (!values.is_empty()).then(|| Self {
            column,
            operator: Operator::NotIn,
            operand: Operand::Set(values),
        })
    }

    /// Case-insensitive substring match on `text`.
    ///
    /// SQLite's `LOWER()` and `LIKE` only fold ASCII letters, so the match is a GLOB
    /// where every cased character becomes a class of its Unicode case variants,
    /// e.g. `école` gives `*[éÉ][cC][oO][lL][eE]*`.
    pub fn contains(column: ColumnRef, text: &str) -> Self {
        Self {
            column,
            operator: Operator::Like,
            operand: Operand::Pattern(format!("*{}*", glob_case_folded(text))),
        }
    }

    /// `start <= column < end`.
    pub fn between(column: ColumnRef, start: Value, end: Value) -> Self {
        Self {
            column,
            operator: Operator::Between,
            operand: Operand::Range(start, end),
        }
    }

    pub fn is_null(column: ColumnRef) -> Self {
        Self {
            column,
            operator: Operator::IsNull,
            operand: Operand::None,
        }
    }

    pub fn is_not_null(column: ColumnRef) -> Self {
        Self {
            column,
            operator: Operator::IsNotNull,
            operand: Operand::None,
        }
    }

    pub fn column(&self) -> &ColumnRef {
        &self.column
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Values bound by this predicate, in binding order.
    pub fn values(&self) -> Vec<Value> {
        match &self.operand {
            Operand::None => Vec::new(),
            Operand::Single(value) => vec![value.clone()],
            Operand::Set(values) => values.clone(),
            Operand::Range(start, end) => vec![start.clone(), end.clone()],
            Operand::Pattern(pattern) => vec![Value::from(pattern.clone())],
        }
    }

    /// Renders the predicate as a sea-query condition.
    pub fn to_condition(&self) -> Condition {
        let col = self.column.expr();

        match &self.operand {
            Operand::Single(value) if self.operator == Operator::Neq => {
                Condition::all().add(col.ne(value.clone()))
            }
            Operand::Single(value) => Condition::all().add(col.eq(value.clone())),
            Operand::Set(values) if self.operator == Operator::NotIn => {
                Condition::all().add(col.is_not_in(values.iter().cloned()))
            }
            Operand::Set(values) => Condition::all().add(col.is_in(values.iter().cloned())),
            Operand::Range(start, end) => Condition::all()
                .add(col.clone().gte(start.clone()))
                .add(col.lt(end.clone())),
            Operand::Pattern(pattern) => Condition::all().add(col.glob(pattern.clone())),
            Operand::None if self.operator == Operator::IsNull => {
                Condition::all().add(col.is_null())
            }
            Operand::None => Condition::all().add(col.is_not_null()),
        }
    }
}

/// Builds a GLOB body matching `text` in any letter case.
///
/// Characters with a single-character case mapping become a class of their variants.
/// GLOB metacharacters are wrapped in a class so they match literally.
fn glob_case_folded(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() * 4);

    for c in text.chars() {
        let variants = case_variants(c);

        if variants.len() > 1 {
            pattern.push('[');
            pattern.extend(variants);
            pattern.push(']');
        } else if matches!(c, '*' | '?' | '[') {
            pattern.push('[');
            pattern.push(c);
            pattern.push(']');
        } else {
            pattern.push(c);
        }
    }

    pattern
}

/// `c` followed by its distinct single-character lower and upper case forms.
fn case_variants(c: char) -> Vec<char> {
    let mut variants = vec![c];
    let lower = single_char(c.to_lowercase());
    let upper = single_char(c.to_uppercase());

    for variant in [lower, upper].into_iter().flatten() {
        if !variants.contains(&variant) {
            variants.push(variant);
        }
    }

    variants
}

fn single_char(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    let first = mapped.next()?;
    mapped.next().is_none().then_some(first)
}
