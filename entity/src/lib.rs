//! SeaORM entity models for the fleet and reservation domain.
//!
//! Column names are snake_case; the query layer exposes them under camelCase API names.

pub mod prelude;

pub mod equipement;
pub mod etablissement;
pub mod point;
pub mod profil;
pub mod reservation;
pub mod societe;
pub mod trajet;
pub mod utilisateur;
pub mod voiture;
