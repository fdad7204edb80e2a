//! Application state shared across all request handlers.
//!
//! Built once during startup and cloned into every handler through Axum's state
//! extraction. Every field is cheap to clone: the connection is a pool and the rest
//! sit behind `Arc` or are small values.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::QueryConfig, query::metadata::EntityRegistry, service::auth::TokenAuthenticator,
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Listable entities, read-only after startup.
    pub registry: Arc<EntityRegistry>,

    /// Token verification and issuance.
    pub authenticator: Arc<TokenAuthenticator>,

    /// Page size, query timeout and search tokens.
    pub query: QueryConfig,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `registry` - Entity registry
    /// - `authenticator` - Token authenticator
    /// - `query` - Listing settings
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        registry: EntityRegistry,
        authenticator: TokenAuthenticator,
        query: QueryConfig,
    ) -> Self {
        Self {
            db,
            registry: Arc::new(registry),
            authenticator: Arc::new(authenticator),
            query,
        }
    }
}
