//! Generic listing of any registered entity.

use sea_orm::DatabaseConnection;

use crate::server::{
    config::QueryConfig,
    data::record::RecordRepository,
    error::query::QueryError,
    model::list::{ListParams, PageResult},
    query::{
        assembler::QueryAssembler,
        criteria::CriteriaBuilder,
        metadata::EntityRegistry,
        search::TextSearch,
        sort::SortParser,
        spec::{QueryFragment, QuerySpec},
    },
};

/// Service turning list parameters into one executed, paginated listing.
pub struct ListService<'a> {
    db: &'a DatabaseConnection,
    registry: &'a EntityRegistry,
    config: &'a QueryConfig,
}

impl<'a> ListService<'a> {
    /// Creates a new ListService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `registry` - Registry of listable entities
    /// - `config` - Page size, timeout and search settings
    ///
    /// # Returns
    /// - `ListService` - New service instance
    pub fn new(
        db: &'a DatabaseConnection,
        registry: &'a EntityRegistry,
        config: &'a QueryConfig,
    ) -> Self {
        Self {
            db,
            registry,
            config,
        }
    }

    /// Lists the entity registered under `resource`.
    ///
    /// # Returns
    /// - `Ok(PageResult)` - Matching rows and page metadata
    /// - `Err(QueryError)` - Invalid parameters or failed execution
    pub async fn list(&self, resource: &str, params: ListParams) -> Result<PageResult, QueryError> {
        self.list_with(resource, params, QueryFragment::new()).await
    }

    /// Lists the entity registered under `resource` with extra AND-combined criteria.
    ///
    /// Inclusion, exclusion and `extra` predicates are AND-combined; text-search
    /// predicates form one OR-group inside that conjunction. When paginated, the total
    /// comes from a separate count statement sharing the same joins and filter;
    /// otherwise it is the number of rows returned. Both statements run under the
    /// configured query timeout.
    ///
    /// # Arguments
    /// - `resource` - Plural resource name, e.g. `voitures`
    /// - `params` - Decoded list parameters
    /// - `extra` - Caller-supplied predicates and the joins they need
    ///
    /// # Returns
    /// - `Ok(PageResult)` - Matching rows and page metadata
    /// - `Err(QueryError::UnknownEntity)` - No entity registered under `resource`
    /// - `Err(QueryError::QueryExecutionFailed)` - Database error or timeout
    /// - `Err(QueryError)` - Any parameter validation failure
    pub async fn list_with(
        &self,
        resource: &str,
        params: ListParams,
        extra: QueryFragment,
    ) -> Result<PageResult, QueryError> {
        let descriptor = self.registry.by_resource(resource)?;
        let entity = descriptor.name();

        let criteria = CriteriaBuilder::new(self.registry);
        let mut spec = QuerySpec::new(descriptor);
        spec.and(criteria.build_inclusion(entity, &params.filters)?)?;
        spec.and(criteria.build_exclusion(entity, &params.exclusions)?)?;
        spec.and(extra)?;

        if let Some(text) = params.filter_text.as_deref().filter(|t| !t.trim().is_empty()) {
            spec.or(TextSearch::new(self.registry, self.config).generate(entity, text)?)?;
        }

        if let Some(order_by) = params.order_by.as_deref() {
            spec.sort_by(SortParser::new(self.registry).parse(entity, order_by)?)?;
        }

        if let Some(pagination) = params.pagination {
            spec.window(pagination.limit, pagination.offset());
        }

        let assembled = QueryAssembler::assemble(&spec, params.pagination.is_some())?;
        let repo = RecordRepository::new(self.db);

        let execution = async {
            let rows = repo.fetch(descriptor, &assembled.data).await?;
            let total = match &assembled.count {
                Some(count) => Some(repo.count(count).await?),
                None => None,
            };
            Ok::<_, sea_orm::DbErr>((rows, total))
        };

        let (rows, total) = tokio::time::timeout(self.config.timeout, execution)
            .await
            .map_err(|_| {
                QueryError::QueryExecutionFailed(format!(
                    "{} listing timed out after {:?}",
                    entity, self.config.timeout
                ))
            })?
            .map_err(|e| QueryError::QueryExecutionFailed(e.to_string()))?;

        let result = match params.pagination {
            Some(pagination) => {
                let total = total.unwrap_or(rows.len() as u64);
                PageResult {
                    rows,
                    total,
                    page_size: Some(pagination.limit),
                    page_count: pagination.page_count(total),
                }
            }
            None => PageResult {
                total: rows.len() as u64,
                rows,
                page_size: None,
                page_count: 1,
            },
        };

        Ok(result)
    }
}
