use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::model::identity::Identity;

/// Repository resolving token subjects to users.
pub struct UtilisateurRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UtilisateurRepository<'a> {
    /// Creates a new UtilisateurRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UtilisateurRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by login together with their profile.
    ///
    /// # Arguments
    /// - `login` - Login carried as the token subject
    ///
    /// # Returns
    /// - `Ok(Some(Identity))` - User found
    /// - `Ok(None)` - No user with that login
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_identity_by_login(&self, login: &str) -> Result<Option<Identity>, DbErr> {
        let found = entity::prelude::Utilisateur::find()
            .filter(entity::utilisateur::Column::Login.eq(login))
            .find_also_related(entity::prelude::Profil)
            .one(self.db)
            .await?;

        Ok(found.map(|(utilisateur, profil)| Identity::from_entity(utilisateur, profil)))
    }
}
