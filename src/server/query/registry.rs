//! Static descriptors of the domain entities.
//!
//! Column names must match the SeaORM models in the `entity` crate; the tests at the
//! bottom of this file check that they do.

use super::metadata::{EntityDescriptor, EntityRegistry, FieldDescriptor, FieldKind};

use FieldKind::{Boolean, Date, DateTime, Float, Integer, String as Text, Time};

const fn scalar(name: &'static str, column: &'static str, kind: FieldKind) -> FieldDescriptor {
    FieldDescriptor::scalar(name, column, kind)
}

const fn to_one(name: &'static str, column: &'static str, target: &'static str) -> FieldDescriptor {
    FieldDescriptor::to_one(name, column, target)
}

static PROFIL: &[FieldDescriptor] = &[
    scalar("id", "id", Integer),
    scalar("nom", "nom", Text),
    scalar("description", "description", Text),
];

static SOCIETE: &[FieldDescriptor] = &[
    scalar("id", "id", Integer),
    scalar("nom", "nom", Text),
    scalar("adresse", "adresse", Text),
    scalar("ville", "ville", Text),
    scalar("codepostal", "codepostal", Text),
    scalar("telephone", "telephone", Text),
    scalar("pays", "pays", Text),
    scalar("siren", "siren", Text),
    FieldDescriptor::to_many("utilisateurs", "Utilisateur"),
    FieldDescriptor::to_many("voitures", "Voiture"),
];

static ETABLISSEMENT: &[FieldDescriptor] = &[
    scalar("id", "id", Integer),
    scalar("nom", "nom", Text),
    scalar("adresse", "adresse", Text),
    scalar("ville", "ville", Text),
    scalar("codepostal", "codepostal", Text),
    scalar("telephone", "telephone", Text),
];

// `password` is never exposed.
static UTILISATEUR: &[FieldDescriptor] = &[
    scalar("id", "id", Integer),
    scalar("nom", "nom", Text),
    scalar("prenom", "prenom", Text),
    scalar("email", "email", Text),
    scalar("login", "login", Text),
    scalar("datenaissance", "datenaissance", Date),
    scalar("adresse", "adresse", Text),
    scalar("codepostal", "codepostal", Text),
    scalar("ville", "ville", Text),
    scalar("pays", "pays", Text),
    scalar("genre", "genre", Text),
    scalar("antecedents", "antecedents", Text).nullable(),
    scalar("actif", "actif", Boolean),
    to_one("societe", "societe_id", "Societe"),
    to_one("profil", "profil_id", "Profil"),
];

static VOITURE: &[FieldDescriptor] = &[
    scalar("id", "id", Integer),
    scalar("immatriculation", "immatriculation", Text),
    scalar("marque", "marque", Text),
    scalar("modele", "modele", Text),
    scalar("annee", "annee", Integer),
    scalar("emplacement", "emplacement", Text),
    scalar("typeVoiture", "type_voiture", Text),
    scalar("etat", "etat", Text),
    scalar("kilometrage", "kilometrage", Integer),
    scalar("disponible", "disponible", Boolean),
    to_one("societe", "societe_id", "Societe"),
    FieldDescriptor::to_many("equipements", "Equipement"),
];

static EQUIPEMENT: &[FieldDescriptor] = &[
    scalar("id", "id", Integer),
    scalar("nom", "nom", Text),
    scalar("description", "description", Text),
    scalar("marque", "marque", Text),
    scalar("modele", "modele", Text),
    scalar("typeEquipement", "type_equipement", Text),
    to_one("voiture", "voiture_id", "Voiture").nullable(),
];

static RESERVATION: &[FieldDescriptor] = &[
    scalar("id", "id", Integer),
    scalar("dateRdv", "date_rdv", Date),
    scalar("heureRdv", "heure_rdv", Time),
    scalar("bontransport", "bontransport", Text),
    scalar("typeSejour", "type_sejour", Text),
    scalar("etat", "etat", Text),
    to_one("etablissement", "etablissement_id", "Etablissement"),
    to_one("societe", "societe_id", "Societe"),
    to_one("utilisateur", "utilisateur_id", "Utilisateur"),
];

static TRAJET: &[FieldDescriptor] = &[
    scalar("id", "id", Integer),
    scalar("etat", "etat", Text),
    scalar("distance", "distance", Float).nullable(),
    scalar("depart", "depart", DateTime).nullable(),
    to_one("ambulancier", "ambulancier_id", "Utilisateur"),
    to_one("reservation", "reservation_id", "Reservation"),
    to_one("voiture", "voiture_id", "Voiture"),
];

static POINT: &[FieldDescriptor] = &[
    scalar("id", "id", Integer),
    scalar("coordonneesGps", "coordonnees_gps", Text),
    scalar("description", "description", Text),
    scalar("titre", "titre", Text),
    to_one("etablissement", "etablissement_id", "Etablissement"),
    to_one("utilisateur", "utilisateur_id", "Utilisateur"),
];

/// Builds the registry of every entity served by the list endpoint.
pub fn domain_registry() -> EntityRegistry {
    EntityRegistry::new([
        EntityDescriptor::new("Profil", "profils", "profil", "id", PROFIL),
        EntityDescriptor::new("Societe", "societes", "societe", "id", SOCIETE),
        EntityDescriptor::new(
            "Etablissement",
            "etablissements",
            "etablissement",
            "id",
            ETABLISSEMENT,
        ),
        EntityDescriptor::new(
            "Utilisateur",
            "utilisateurs",
            "utilisateur",
            "id",
            UTILISATEUR,
        ),
        EntityDescriptor::new("Voiture", "voitures", "voiture", "id", VOITURE),
        EntityDescriptor::new("Equipement", "equipements", "equipement", "id", EQUIPEMENT),
        EntityDescriptor::new("Reservation", "reservations", "reservation", "id", RESERVATION),
        EntityDescriptor::new("Trajet", "trajets", "trajet", "id", TRAJET),
        EntityDescriptor::new("Point", "points", "point", "id", POINT),
    ])
}
