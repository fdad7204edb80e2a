use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test profiles.
pub struct ProfilFactory<'a> {
    db: &'a DatabaseConnection,
    nom: String,
    description: String,
}

impl<'a> ProfilFactory<'a> {
    /// Creates a new ProfilFactory with default values.
    ///
    /// Defaults:
    /// - nom: `"Profil {id}"`
    /// - description: `"Description {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            nom: format!("Profil {}", id),
            description: format!("Description {}", id),
        }
    }

    pub fn nom(mut self, nom: impl Into<String>) -> Self {
        self.nom = nom.into();
        self
    }

    /// Builds and inserts the profile into the database.
    ///
    /// # Returns
    /// - `Ok(entity::profil::Model)` - Created profile entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::profil::Model, DbErr> {
        entity::profil::ActiveModel {
            nom: ActiveValue::Set(self.nom),
            description: ActiveValue::Set(self.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a profile with default values.
pub async fn create_profil(db: &DatabaseConnection) -> Result<entity::profil::Model, DbErr> {
    ProfilFactory::new(db).build().await
}
