//! Listing parameters and results.
//!
//! `ListParams` is decoded from the raw query string of the list endpoint; `PageResult`
//! is what the listing service returns before it is shaped into the response envelope.

use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value as JsonValue};

use crate::{
    model::list::{ListEnvelopeDto, PaginatorDto},
    server::error::query::QueryError,
};

/// One listed row, keyed by field name.
pub type Record = Map<String, JsonValue>;

pub const PAGE_PARAM: &str = "page";
pub const LIMIT_PARAM: &str = "limit";
pub const ORDER_BY_PARAM: &str = "orderBy";
pub const FILTER_TEXT_PARAM: &str = "filter_text";
pub const EXCEPT_PARAM: &str = "except";

/// Largest LIMIT or OFFSET the database binds; both travel as signed 64-bit integers.
const MAX_WINDOW_VALUE: u64 = i64::MAX as u64;

/// Query-string keys that are never treated as inclusion filters.
const RESERVED_PARAMS: &[&str] = &[
    PAGE_PARAM,
    LIMIT_PARAM,
    ORDER_BY_PARAM,
    FILTER_TEXT_PARAM,
    EXCEPT_PARAM,
];

/// Requested page window. Pages are numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
}

impl Pagination {
    /// Resolves the `page` and `limit` parameters.
    ///
    /// Pagination is disabled when neither is given. A missing `page` defaults to 1 and
    /// a missing `limit` to `default_limit`.
    ///
    /// # Arguments
    /// - `page` - Raw `page` parameter
    /// - `limit` - Raw `limit` parameter
    /// - `default_limit` - Configured page size
    ///
    /// # Returns
    /// - `Ok(Some(Pagination))` - Pagination requested
    /// - `Ok(None)` - Neither parameter given
    /// - `Err(QueryError::InvalidPagination)` - A value is not a positive integer, or the
    ///   limit or the resulting offset exceeds `i64::MAX`
    pub fn resolve(
        page: Option<&str>,
        limit: Option<&str>,
        default_limit: u64,
    ) -> Result<Option<Self>, QueryError> {
        if page.is_none() && limit.is_none() {
            return Ok(None);
        }

        let page = page.map(|p| positive(PAGE_PARAM, p)).transpose()?.unwrap_or(1);
        let limit = match limit {
            Some(l) => positive(LIMIT_PARAM, l)?,
            None => default_limit,
        };

        if limit > MAX_WINDOW_VALUE {
            return Err(QueryError::InvalidPagination(format!(
                "{} must not exceed {}, got {}",
                LIMIT_PARAM, MAX_WINDOW_VALUE, limit
            )));
        }

        let within_range = (page - 1)
            .checked_mul(limit)
            .is_some_and(|offset| offset <= MAX_WINDOW_VALUE);
        if !within_range {
            return Err(QueryError::InvalidPagination(format!(
                "{} {} with {} {} is past the last addressable row",
                PAGE_PARAM, page, LIMIT_PARAM, limit
            )));
        }

        Ok(Some(Self { page, limit }))
    }

    /// Rows skipped before this page. `resolve` guarantees it fits in an `i64`.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Number of pages needed for `total` rows.
    pub fn page_count(&self, total: u64) -> u64 {
        total.div_ceil(self.limit)
    }
}

fn positive(name: &str, raw: &str) -> Result<u64, QueryError> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|value| *value > 0 && *value <= MAX_WINDOW_VALUE)
        .ok_or_else(|| {
            QueryError::InvalidPagination(format!("{} must be a positive integer, got {:?}", name, raw))
        })
}

/// Decoded parameters of one list request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListParams {
    pub pagination: Option<Pagination>,
    pub order_by: Option<String>,
    pub filter_text: Option<String>,
    /// Inclusion filters, every non-reserved key of the query string.
    pub filters: BTreeMap<String, String>,
    /// Exclusion filters decoded from the `except` JSON object.
    pub exclusions: Map<String, JsonValue>,
}

impl ListParams {
    /// Splits a raw query string into list parameters.
    ///
    /// A blank `except` is treated as absent.
    ///
    /// # Arguments
    /// - `query` - Query-string pairs
    /// - `default_limit` - Page size used when only `page` is given
    ///
    /// # Returns
    /// - `Ok(ListParams)` - Decoded parameters
    /// - `Err(QueryError::InvalidPagination)` - Bad `page` or `limit`
    /// - `Err(QueryError::InvalidExceptParameter)` - `except` is not a JSON object
    pub fn from_query(
        mut query: HashMap<String, String>,
        default_limit: u64,
    ) -> Result<Self, QueryError> {
        let pagination = Pagination::resolve(
            query.get(PAGE_PARAM).map(String::as_str),
            query.get(LIMIT_PARAM).map(String::as_str),
            default_limit,
        )?;

        let exclusions = match query.remove(EXCEPT_PARAM) {
            Some(raw) if !raw.trim().is_empty() => match serde_json::from_str(&raw) {
                Ok(JsonValue::Object(map)) => map,
                Ok(_) => {
                    return Err(QueryError::InvalidExceptParameter(
                        "expected a JSON object".to_string(),
                    ))
                }
                Err(e) => return Err(QueryError::InvalidExceptParameter(e.to_string())),
            },
            _ => Map::new(),
        };

        let order_by = query.remove(ORDER_BY_PARAM);
        let filter_text = query.remove(FILTER_TEXT_PARAM);
        let filters = query
            .into_iter()
            .filter(|(key, _)| !RESERVED_PARAMS.contains(&key.as_str()))
            .collect();

        Ok(Self {
            pagination,
            order_by,
            filter_text,
            filters,
            exclusions,
        })
    }
}

/// Rows of one listing with their page metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult {
    pub rows: Vec<Record>,
    /// Matching rows across all pages.
    pub total: u64,
    /// Page size, `None` when the listing was not paginated.
    pub page_size: Option<u64>,
    /// Number of pages; 1 when the listing was not paginated.
    pub page_count: u64,
}

impl PageResult {
    /// Converts the result into the response envelope.
    ///
    /// A result without rows becomes the empty envelope `{}`, even when paginated.
    ///
    /// # Returns
    /// - `ListEnvelopeDto` - Envelope ready for serialization
    pub fn into_dto(self) -> ListEnvelopeDto {
        if self.rows.is_empty() {
            return ListEnvelopeDto::Empty {};
        }

        let paginator = self.page_size.map(|rows_per_page| PaginatorDto {
            rows_per_page,
            page_count: self.page_count,
            total: self.total,
        });

        ListEnvelopeDto::Results {
            results: self.rows,
            paginator,
        }
    }
}
