//! Execution of assembled listing statements.
//!
//! Rows come back as dynamic records keyed by field name, decoded column by column
//! according to the entity descriptor that produced the statement.

use sea_orm::{
    sea_query::SelectStatement, ConnectionTrait, DatabaseConnection, DbErr, QueryResult,
};
use serde_json::Value as JsonValue;

use crate::server::{
    model::list::Record,
    query::{
        assembler::COUNT_ALIAS,
        metadata::{EntityDescriptor, FieldKind, FieldType},
    },
};

/// Wire format of datetime fields.
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
/// Wire format of time fields.
const TIME_FORMAT: &str = "%H:%M:%S";

/// Repository running generic listing statements for any registered entity.
pub struct RecordRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecordRepository<'a> {
    /// Creates a new RecordRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `RecordRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Runs a data statement and decodes every row.
    ///
    /// Relations are returned as the id of the related row.
    ///
    /// # Arguments
    /// - `descriptor` - Entity the statement selects from
    /// - `statement` - Data statement built by the assembler
    ///
    /// # Returns
    /// - `Ok(Vec<Record>)` - Rows in statement order
    /// - `Err(DbErr)` - Query failed or a column could not be decoded
    pub async fn fetch(
        &self,
        descriptor: &EntityDescriptor,
        statement: &SelectStatement,
    ) -> Result<Vec<Record>, DbErr> {
        self.log_statement(statement);

        let rows = self.db.query_all(statement).await?;

        rows.iter().map(|row| decode_row(descriptor, row)).collect()
    }

    /// Runs a count statement.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of matching rows
    /// - `Err(DbErr)` - Query failed
    pub async fn count(&self, statement: &SelectStatement) -> Result<u64, DbErr> {
        self.log_statement(statement);

        let Some(row) = self.db.query_one(statement).await? else {
            return Ok(0);
        };
        let total: i64 = row.try_get("", COUNT_ALIAS)?;

        Ok(total.max(0) as u64)
    }

    fn log_statement(&self, statement: &SelectStatement) {
        let built = self.db.get_database_backend().build(statement);
        tracing::debug!("Listing query: {}", built.sql);
    }
}

fn decode_row(descriptor: &EntityDescriptor, row: &QueryResult) -> Result<Record, DbErr> {
    let mut record = Record::new();

    for field in descriptor.fields() {
        if field.column.is_none() {
            continue;
        }

        let value = match field.ty {
            FieldType::Scalar(kind) => decode_scalar(row, field.name, kind)?,
            FieldType::ToOne { .. } => decode_scalar(row, field.name, FieldKind::Integer)?,
            FieldType::ToMany { .. } => continue,
        };
        record.insert(field.name.to_string(), value);
    }

    Ok(record)
}

fn decode_scalar(row: &QueryResult, name: &str, kind: FieldKind) -> Result<JsonValue, DbErr> {
    let value = match kind {
        FieldKind::String => row.try_get::<Option<String>>("", name)?.map(JsonValue::from),
        FieldKind::Integer => row.try_get::<Option<i64>>("", name)?.map(JsonValue::from),
        FieldKind::Float => row.try_get::<Option<f64>>("", name)?.map(JsonValue::from),
        FieldKind::Boolean => row.try_get::<Option<bool>>("", name)?.map(JsonValue::from),
        FieldKind::Date => row
            .try_get::<Option<chrono::NaiveDate>>("", name)?
            .map(|date| JsonValue::from(date.to_string())),
        FieldKind::DateTime => row
            .try_get::<Option<chrono::NaiveDateTime>>("", name)?
            .map(|datetime| JsonValue::from(datetime.format(DATETIME_FORMAT).to_string())),
        FieldKind::Time => row
            .try_get::<Option<chrono::NaiveTime>>("", name)?
            .map(|time| JsonValue::from(time.format(TIME_FORMAT).to_string())),
    };

    Ok(value.unwrap_or(JsonValue::Null))
}
