//! Company factory for creating test `societe` rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test companies with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let societe = SocieteFactory::new(&db)
///     .nom("Dupont Transports")
///     .ville("Lyon")
///     .build()
///     .await?;
/// ```
pub struct SocieteFactory<'a> {
    db: &'a DatabaseConnection,
    nom: String,
    adresse: String,
    ville: String,
    codepostal: String,
    telephone: String,
    pays: String,
    siren: String,
}

impl<'a> SocieteFactory<'a> {
    /// Creates a new SocieteFactory with default values.
    ///
    /// Defaults:
    /// - nom: `"Societe {id}"`
    /// - ville: `"Paris"`
    /// - siren: nine digits derived from the counter
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `SocieteFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            nom: format!("Societe {}", id),
            adresse: format!("{} rue de la Paix", id),
            ville: "Paris".to_string(),
            codepostal: "75002".to_string(),
            telephone: "0102030405".to_string(),
            pays: "France".to_string(),
            siren: format!("{:09}", id),
        }
    }

    /// Sets the company name.
    pub fn nom(mut self, nom: impl Into<String>) -> Self {
        self.nom = nom.into();
        self
    }

    /// Sets the company city.
    pub fn ville(mut self, ville: impl Into<String>) -> Self {
        self.ville = ville.into();
        self
    }

    /// Builds and inserts the company into the database.
    ///
    /// # Returns
    /// - `Ok(entity::societe::Model)` - Created company entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::societe::Model, DbErr> {
        entity::societe::ActiveModel {
            nom: ActiveValue::Set(self.nom),
            adresse: ActiveValue::Set(self.adresse),
            ville: ActiveValue::Set(self.ville),
            codepostal: ActiveValue::Set(self.codepostal),
            telephone: ActiveValue::Set(self.telephone),
            pays: ActiveValue::Set(self.pays),
            siren: ActiveValue::Set(self.siren),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a company with default values.
///
/// Shorthand for `SocieteFactory::new(db).build().await`.
pub async fn create_societe(db: &DatabaseConnection) -> Result<entity::societe::Model, DbErr> {
    SocieteFactory::new(db).build().await
}
