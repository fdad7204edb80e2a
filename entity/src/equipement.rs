use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "equipement")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nom: String,
    pub description: String,
    pub marque: String,
    pub modele: String,
    pub type_equipement: String,
    pub voiture_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::voiture::Entity",
        from = "Column::VoitureId",
        to = "super::voiture::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Voiture,
}

impl Related<super::voiture::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Voiture.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
