use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_profil_table::Profil, m20250301_000002_create_societe_table::Societe,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Utilisateur::Table)
                    .if_not_exists()
                    .col(pk_auto(Utilisateur::Id))
                    .col(string(Utilisateur::Nom))
                    .col(string(Utilisateur::Prenom))
                    .col(string(Utilisateur::Email))
                    .col(string_uniq(Utilisateur::Login))
                    .col(string(Utilisateur::Password))
                    .col(date(Utilisateur::Datenaissance))
                    .col(string(Utilisateur::Adresse))
                    .col(string(Utilisateur::Codepostal))
                    .col(string(Utilisateur::Ville))
                    .col(string(Utilisateur::Pays))
                    .col(string(Utilisateur::Genre))
                    .col(text_null(Utilisateur::Antecedents))
                    .col(boolean(Utilisateur::Actif).default(true))
                    .col(integer(Utilisateur::SocieteId))
                    .col(integer(Utilisateur::ProfilId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_utilisateur_societe_id")
                            .from(Utilisateur::Table, Utilisateur::SocieteId)
                            .to(Societe::Table, Societe::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_utilisateur_profil_id")
                            .from(Utilisateur::Table, Utilisateur::ProfilId)
                            .to(Profil::Table, Profil::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Utilisateur::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Utilisateur {
    Table,
    Id,
    Nom,
    Prenom,
    Email,
    Login,
    Password,
    Datenaissance,
    Adresse,
    Codepostal,
    Ville,
    Pays,
    Genre,
    Antecedents,
    Actif,
    SocieteId,
    ProfilId,
}
