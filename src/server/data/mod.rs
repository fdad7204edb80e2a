//! Database repository layer.
//!
//! `RecordRepository` executes the statements assembled by the query engine for any
//! registered entity. `UtilisateurRepository` resolves authenticated identities.

pub mod record;
pub mod utilisateur;

#[cfg(test)]
mod test;
