//! Generic entity-query engine.
//!
//! Turns list parameters into one injection-safe SQL query for any registered entity:
//!
//! - `metadata` / `registry` - Static entity descriptors and their lookup
//! - `criteria` - Inclusion (`field=value`) and exclusion (`except`) filters
//! - `search` - Free-text search across scalar fields and direct relations
//! - `sort` - `orderBy` expression parsing
//! - `spec` / `predicate` - Per-request query description
//! - `assembler` - Rendering of the description into sea-query statements
//!
//! Everything here is pure: statements are executed by the data layer.

pub mod assembler;
pub mod criteria;
pub mod metadata;
pub mod predicate;
pub mod registry;
pub mod search;
pub mod sort;
pub mod spec;
pub mod value;

#[cfg(test)]
mod test;
