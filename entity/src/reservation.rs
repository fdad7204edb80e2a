use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "reservation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date_rdv: Date,
    pub heure_rdv: Time,
    pub bontransport: String,
    pub type_sejour: String,
    pub etat: String,
    pub etablissement_id: i32,
    pub societe_id: i32,
    pub utilisateur_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::etablissement::Entity",
        from = "Column::EtablissementId",
        to = "super::etablissement::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Etablissement,
    #[sea_orm(
        belongs_to = "super::societe::Entity",
        from = "Column::SocieteId",
        to = "super::societe::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Societe,
    #[sea_orm(
        belongs_to = "super::utilisateur::Entity",
        from = "Column::UtilisateurId",
        to = "super::utilisateur::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Utilisateur,
}

impl Related<super::etablissement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Etablissement.def()
    }
}

impl Related<super::societe::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Societe.def()
    }
}

impl Related<super::utilisateur::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Utilisateur.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
