use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000005_create_voiture_table::Voiture;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Equipement::Table)
                    .if_not_exists()
                    .col(pk_auto(Equipement::Id))
                    .col(string(Equipement::Nom))
                    .col(string(Equipement::Description))
                    .col(string(Equipement::Marque))
                    .col(string(Equipement::Modele))
                    .col(string(Equipement::TypeEquipement))
                    .col(integer_null(Equipement::VoitureId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_equipement_voiture_id")
                            .from(Equipement::Table, Equipement::VoitureId)
                            .to(Voiture::Table, Voiture::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Equipement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Equipement {
    Table,
    Id,
    Nom,
    Description,
    Marque,
    Modele,
    TypeEquipement,
    VoitureId,
}
