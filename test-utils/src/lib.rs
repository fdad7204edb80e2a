//! Fleetdesk Test Utils
//!
//! Shared testing utilities for the fleetdesk backend. The crate offers a builder for
//! test contexts backed by in-memory SQLite databases and factories for seeding domain
//! entities.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders that insert domain entities with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_vehicles() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let societe = factory::create_societe(db).await?;
//!     factory::create_voiture(db, societe.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
