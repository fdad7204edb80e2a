use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "utilisateur")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    #[sea_orm(unique)]
    pub login: String,
    /// Password hash. Never exposed through the query registry.
    pub password: String,
    pub datenaissance: Date,
    pub adresse: String,
    pub codepostal: String,
    pub ville: String,
    pub pays: String,
    pub genre: String,
    pub antecedents: Option<String>,
    pub actif: bool,
    pub societe_id: i32,
    pub profil_id: i32,
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
    #[sea_orm(
        belongs_to = "super::profil::Entity",
        from = "Column::ProfilId",
        to = "super::profil::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Profil,
}

impl Related<super::societe::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Societe.def()
    }
}

impl Related<super::profil::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profil.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
