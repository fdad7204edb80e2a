use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "societe")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nom: String,
    pub adresse: String,
    pub ville: String,
    pub codepostal: String,
    pub telephone: String,
    pub pays: String,
    pub siren: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::utilisateur::Entity")]
    Utilisateur,
    #[sea_orm(has_many = "super::voiture::Entity")]
    Voiture,
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservation,
}

impl Related<super::utilisateur::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Utilisateur.def()
    }
}

impl Related<super::voiture::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Voiture.def()
    }
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
