//! Identity resolved from an authentication token.

/// User a token was issued to, with the profile that decides what it may access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Database id of the user.
    pub id: i32,
    /// Login carried as the token subject.
    pub login: String,
    pub nom: String,
    pub prenom: String,
    /// Authorization class checked against the profile deny-list.
    pub profil_id: i32,
    /// Profile name, when the profile row still exists.
    pub profil_nom: Option<String>,
}

impl Identity {
    /// Converts a user entity and its profile at the repository boundary.
    ///
    /// # Arguments
    /// - `utilisateur` - User entity model
    /// - `profil` - Related profile, if found
    ///
    /// # Returns
    /// - `Identity` - Resolved identity
    pub fn from_entity(
        utilisateur: entity::utilisateur::Model,
        profil: Option<entity::profil::Model>,
    ) -> Self {
        Self {
            id: utilisateur.id,
            login: utilisateur.login,
            nom: utilisateur.nom,
            prenom: utilisateur.prenom,
            profil_id: utilisateur.profil_id,
            profil_nom: profil.map(|p| p.nom),
        }
    }
}
