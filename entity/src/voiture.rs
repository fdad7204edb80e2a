use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "voiture")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub immatriculation: String,
    pub marque: String,
    pub modele: String,
    pub annee: i32,
    pub emplacement: String,
    pub type_voiture: String,
    pub etat: String,
    pub kilometrage: i32,
    pub disponible: bool,
    pub societe_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::societe::Entity",
        from = "Column::SocieteId",
        to = "super::societe::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Societe,
    #[sea_orm(has_many = "super::equipement::Entity")]
    Equipement,
}

impl Related<super::societe::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Societe.def()
    }
}

impl Related<super::equipement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Equipement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
