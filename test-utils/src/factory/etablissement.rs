use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test establishments (care facilities served by reservations).
pub struct EtablissementFactory<'a> {
    db: &'a DatabaseConnection,
    nom: String,
    ville: String,
}

impl<'a> EtablissementFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            nom: format!("Clinique {}", id),
            ville: "Lyon".to_string(),
        }
    }

    pub fn nom(mut self, nom: impl Into<String>) -> Self {
        self.nom = nom.into();
        self
    }

    pub fn ville(mut self, ville: impl Into<String>) -> Self {
        self.ville = ville.into();
        self
    }

    /// Builds and inserts the establishment into the database.
    ///
    /// # Returns
    /// - `Ok(entity::etablissement::Model)` - Created establishment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::etablissement::Model, DbErr> {
        entity::etablissement::ActiveModel {
            nom: ActiveValue::Set(self.nom),
            adresse: ActiveValue::Set("1 place Bellecour".to_string()),
            ville: ActiveValue::Set(self.ville),
            codepostal: ActiveValue::Set("69002".to_string()),
            telephone: ActiveValue::Set("0478000000".to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an establishment with default values.
pub async fn create_etablissement(
    db: &DatabaseConnection,
) -> Result<entity::etablissement::Model, DbErr> {
    EtablissementFactory::new(db).build().await
}
