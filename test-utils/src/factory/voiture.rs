//! Vehicle factory for creating test `voiture` rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test vehicles with customizable fields.
pub struct VoitureFactory<'a> {
    db: &'a DatabaseConnection,
    immatriculation: String,
    marque: String,
    modele: String,
    annee: i32,
    type_voiture: String,
    etat: String,
    kilometrage: i32,
    disponible: bool,
    societe_id: i32,
}

impl<'a> VoitureFactory<'a> {
    /// Creates a new VoitureFactory with default values.
    ///
    /// Defaults:
    /// - immatriculation: `"AA-{id}-ZZ"`
    /// - marque / modele: `"Peugeot"` / `"Expert"`
    /// - annee: 2020
    /// - disponible: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `societe_id` - Owning company
    pub fn new(db: &'a DatabaseConnection, societe_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            immatriculation: format!("AA-{:03}-ZZ", id % 1000),
            marque: "Peugeot".to_string(),
            modele: "Expert".to_string(),
            annee: 2020,
            type_voiture: "ambulance".to_string(),
            etat: "neuf".to_string(),
            kilometrage: 0,
            disponible: true,
            societe_id,
        }
    }

    pub fn immatriculation(mut self, immatriculation: impl Into<String>) -> Self {
        self.immatriculation = immatriculation.into();
        self
    }

    pub fn marque(mut self, marque: impl Into<String>) -> Self {
        self.marque = marque.into();
        self
    }

    pub fn modele(mut self, modele: impl Into<String>) -> Self {
        self.modele = modele.into();
        self
    }

    pub fn annee(mut self, annee: i32) -> Self {
        self.annee = annee;
        self
    }

    pub fn type_voiture(mut self, type_voiture: impl Into<String>) -> Self {
        self.type_voiture = type_voiture.into();
        self
    }

    pub fn etat(mut self, etat: impl Into<String>) -> Self {
        self.etat = etat.into();
        self
    }

    pub fn kilometrage(mut self, kilometrage: i32) -> Self {
        self.kilometrage = kilometrage;
        self
    }

    pub fn disponible(mut self, disponible: bool) -> Self {
        self.disponible = disponible;
        self
    }

    /// Builds and inserts the vehicle into the database.
    ///
    /// # Returns
    /// - `Ok(entity::voiture::Model)` - Created vehicle entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::voiture::Model, DbErr> {
        entity::voiture::ActiveModel {
            immatriculation: ActiveValue::Set(self.immatriculation),
            marque: ActiveValue::Set(self.marque),
            modele: ActiveValue::Set(self.modele),
            annee: ActiveValue::Set(self.annee),
            emplacement: ActiveValue::Set("garage".to_string()),
            type_voiture: ActiveValue::Set(self.type_voiture),
            etat: ActiveValue::Set(self.etat),
            kilometrage: ActiveValue::Set(self.kilometrage),
            disponible: ActiveValue::Set(self.disponible),
            societe_id: ActiveValue::Set(self.societe_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a vehicle with default values for the given company.
pub async fn create_voiture(
    db: &DatabaseConnection,
    societe_id: i32,
) -> Result<entity::voiture::Model, DbErr> {
    VoitureFactory::new(db, societe_id).build().await
}
