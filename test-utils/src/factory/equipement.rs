use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test equipment, optionally mounted on a vehicle.
pub struct EquipementFactory<'a> {
    db: &'a DatabaseConnection,
    nom: String,
    voiture_id: Option<i32>,
}

impl<'a> EquipementFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            nom: format!("Equipement {}", next_id()),
            voiture_id: None,
        }
    }

    pub fn nom(mut self, nom: impl Into<String>) -> Self {
        self.nom = nom.into();
        self
    }

    pub fn voiture_id(mut self, voiture_id: Option<i32>) -> Self {
        self.voiture_id = voiture_id;
        self
    }

    pub async fn build(self) -> Result<entity::equipement::Model, DbErr> {
        entity::equipement::ActiveModel {
            nom: ActiveValue::Set(self.nom),
            description: ActiveValue::Set("Brancard".to_string()),
            marque: ActiveValue::Set("Ferno".to_string()),
            modele: ActiveValue::Set("Pegasus".to_string()),
            type_equipement: ActiveValue::Set("brancard".to_string()),
            voiture_id: ActiveValue::Set(self.voiture_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an equipment item mounted on the given vehicle.
pub async fn create_equipement(
    db: &DatabaseConnection,
    voiture_id: Option<i32>,
) -> Result<entity::equipement::Model, DbErr> {
    EquipementFactory::new(db).voiture_id(voiture_id).build().await
}
