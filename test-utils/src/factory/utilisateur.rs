//! User factory for creating test `utilisateur` rows.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user = UtilisateurFactory::new(&db, societe.id, profil.id)
///     .nom("Dupont")
///     .login("jdupont")
///     .build()
///     .await?;
/// ```
pub struct UtilisateurFactory<'a> {
    db: &'a DatabaseConnection,
    nom: String,
    prenom: String,
    login: String,
    datenaissance: NaiveDate,
    antecedents: Option<String>,
    actif: bool,
    societe_id: i32,
    profil_id: i32,
}

impl<'a> UtilisateurFactory<'a> {
    /// Creates a new UtilisateurFactory with default values.
    ///
    /// Defaults:
    /// - nom: `"Nom {id}"`
    /// - prenom: `"Prenom {id}"`
    /// - login: `"user{id}"`
    /// - datenaissance: 1980-01-01
    /// - antecedents: `None`
    /// - actif: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `societe_id` - Company the user belongs to
    /// - `profil_id` - Profile granted to the user
    ///
    /// # Returns
    /// - `UtilisateurFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, societe_id: i32, profil_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            nom: format!("Nom {}", id),
            prenom: format!("Prenom {}", id),
            login: format!("user{}", id),
            datenaissance: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap_or_default(),
            antecedents: None,
            actif: true,
            societe_id,
            profil_id,
        }
    }

    /// Sets the last name.
    pub fn nom(mut self, nom: impl Into<String>) -> Self {
        self.nom = nom.into();
        self
    }

    /// Sets the first name.
    pub fn prenom(mut self, prenom: impl Into<String>) -> Self {
        self.prenom = prenom.into();
        self
    }

    /// Sets the login used as token subject.
    pub fn login(mut self, login: impl Into<String>) -> Self {
        self.login = login.into();
        self
    }

    /// Sets the birth date.
    pub fn datenaissance(mut self, datenaissance: NaiveDate) -> Self {
        self.datenaissance = datenaissance;
        self
    }

    /// Sets the medical history note.
    pub fn antecedents(mut self, antecedents: Option<String>) -> Self {
        self.antecedents = antecedents;
        self
    }

    /// Sets whether the account is active.
    pub fn actif(mut self, actif: bool) -> Self {
        self.actif = actif;
        self
    }

    /// Builds and inserts the user into the database.
    ///
    /// # Returns
    /// - `Ok(entity::utilisateur::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::utilisateur::Model, DbErr> {
        entity::utilisateur::ActiveModel {
            email: ActiveValue::Set(format!("{}@example.org", self.login)),
            nom: ActiveValue::Set(self.nom),
            prenom: ActiveValue::Set(self.prenom),
            login: ActiveValue::Set(self.login),
            password: ActiveValue::Set("hash".to_string()),
            datenaissance: ActiveValue::Set(self.datenaissance),
            adresse: ActiveValue::Set("10 avenue Foch".to_string()),
            codepostal: ActiveValue::Set("75016".to_string()),
            ville: ActiveValue::Set("Paris".to_string()),
            pays: ActiveValue::Set("France".to_string()),
            genre: ActiveValue::Set("M".to_string()),
            antecedents: ActiveValue::Set(self.antecedents),
            actif: ActiveValue::Set(self.actif),
            societe_id: ActiveValue::Set(self.societe_id),
            profil_id: ActiveValue::Set(self.profil_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UtilisateurFactory::new(db, societe_id, profil_id).build().await`.
pub async fn create_utilisateur(
    db: &DatabaseConnection,
    societe_id: i32,
    profil_id: i32,
) -> Result<entity::utilisateur::Model, DbErr> {
    UtilisateurFactory::new(db, societe_id, profil_id)
        .build()
        .await
}
