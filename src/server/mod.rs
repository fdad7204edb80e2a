//! Server-side API backend.
//!
//! The backend uses Axum as the web framework and SeaORM for database access. Its core
//! is a generic query engine that lists any registered entity from caller-supplied
//! filters, search text, sort and pagination, behind stateless token authentication.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Listing orchestration and the token protocol
//! - **Query Engine** (`query/`) - Entity metadata and injection-safe query construction
//! - **Data Layer** (`data/`) - Statement execution and identity lookup
//! - **Model Layer** (`model/`) - Domain models and operation parameters
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Router** (`router`) - Axum route configuration
//!
//! # Request Flow
//!
//! 1. **Router** receives the request and routes it to a controller
//! 2. **Middleware** verifies the token and resolves the caller's identity
//! 3. **Controller** decodes the query string into list parameters
//! 4. **Service** builds the query through the engine and runs it under a timeout
//! 5. **Data** executes the statements and decodes rows
//! 6. **Controller** shapes the result into the response envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod query;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
