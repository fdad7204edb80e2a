//! Service layer between the controllers and the data layer.
//!
//! - `listing` - Generic entity listing built on the query engine
//! - `token` - Token cipher, payload format and issuance
//! - `auth` - Token verification and identity resolution

pub mod auth;
pub mod listing;
pub mod token;

#[cfg(test)]
mod test;
