use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "trajet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub etat: String,
    pub distance: Option<f64>,
    pub depart: Option<DateTime>,
    /// Driver assigned to the trip.
    pub ambulancier_id: i32,
    pub reservation_id: i32,
    pub voiture_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::utilisateur::Entity",
        from = "Column::AmbulancierId",
        to = "super::utilisateur::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Ambulancier,
    #[sea_orm(
        belongs_to = "super::reservation::Entity",
        from = "Column::ReservationId",
        to = "super::reservation::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Reservation,
    #[sea_orm(
        belongs_to = "super::voiture::Entity",
        from = "Column::VoitureId",
        to = "super::voiture::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Voiture,
}

impl Related<super::utilisateur::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ambulancier.def()
    }
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl Related<super::voiture::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Voiture.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
