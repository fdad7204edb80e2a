use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000002_create_societe_table::Societe;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Voiture::Table)
                    .if_not_exists()
                    .col(pk_auto(Voiture::Id))
                    .col(string(Voiture::Immatriculation))
                    .col(string(Voiture::Marque))
                    .col(string(Voiture::Modele))
                    .col(integer(Voiture::Annee))
                    .col(string(Voiture::Emplacement))
                    .col(string(Voiture::TypeVoiture))
                    .col(string(Voiture::Etat))
                    .col(integer(Voiture::Kilometrage).default(0))
                    .col(boolean(Voiture::Disponible).default(true))
                    .col(integer(Voiture::SocieteId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_voiture_societe_id")
                            .from(Voiture::Table, Voiture::SocieteId)
                            .to(Societe::Table, Societe::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Voiture::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Voiture {
    Table,
    Id,
    Immatriculation,
    Marque,
    Modele,
    Annee,
    Emplacement,
    TypeVoiture,
    Etat,
    Kilometrage,
    Disponible,
    SocieteId,
}
