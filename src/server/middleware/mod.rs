//! Request guards.
//!
//! `AuthGuard` reads the token header and resolves the caller's identity before a
//! controller runs its operation.

pub mod auth;

#[cfg(test)]
mod test;
