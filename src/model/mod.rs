//! Wire DTOs returned by the API.

pub mod api;
pub mod auth;
pub mod list;
