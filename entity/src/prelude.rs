pub use super::equipement::Entity as Equipement;
pub use super::etablissement::Entity as Etablissement;
pub use super::point::Entity as Point;
pub use super::profil::Entity as Profil;
pub use super::reservation::Entity as Reservation;
pub use super::societe::Entity as Societe;
pub use super::trajet::Entity as Trajet;
pub use super::utilisateur::Entity as Utilisateur;
pub use super::voiture::Entity as Voiture;
