//! Reservation factory for creating test `reservation` rows.

use chrono::{NaiveDate, NaiveTime};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations.
///
/// Requires the establishment, company and patient ids up front.
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    date_rdv: NaiveDate,
    heure_rdv: NaiveTime,
    etat: String,
    etablissement_id: i32,
    societe_id: i32,
    utilisateur_id: i32,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - date_rdv: 2024-03-15
    /// - heure_rdv: 09:30:00
    /// - etat: `"en_attente"`
    pub fn new(
        db: &'a DatabaseConnection,
        etablissement_id: i32,
        societe_id: i32,
        utilisateur_id: i32,
    ) -> Self {
        Self {
            db,
            date_rdv: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap_or_default(),
            heure_rdv: NaiveTime::from_hms_opt(9, 30, 0).unwrap_or_default(),
            etat: "en_attente".to_string(),
            etablissement_id,
            societe_id,
            utilisateur_id,
        }
    }

    /// Sets the appointment date.
    pub fn date_rdv(mut self, date_rdv: NaiveDate) -> Self {
        self.date_rdv = date_rdv;
        self
    }

    /// Sets the appointment time.
    pub fn heure_rdv(mut self, heure_rdv: NaiveTime) -> Self {
        self.heure_rdv = heure_rdv;
        self
    }

    /// Sets the reservation state.
    pub fn etat(mut self, etat: impl Into<String>) -> Self {
        self.etat = etat.into();
        self
    }

    /// Builds and inserts the reservation into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reservation::Model)` - Created reservation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            date_rdv: ActiveValue::Set(self.date_rdv),
            heure_rdv: ActiveValue::Set(self.heure_rdv),
            bontransport: ActiveValue::Set("BT-0001".to_string()),
            type_sejour: ActiveValue::Set("consultation".to_string()),
            etat: ActiveValue::Set(self.etat),
            etablissement_id: ActiveValue::Set(self.etablissement_id),
            societe_id: ActiveValue::Set(self.societe_id),
            utilisateur_id: ActiveValue::Set(self.utilisateur_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reservation with default values.
pub async fn create_reservation(
    db: &DatabaseConnection,
    etablissement_id: i32,
    societe_id: i32,
    utilisateur_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, etablissement_id, societe_id, utilisateur_id)
        .build()
        .await
}
