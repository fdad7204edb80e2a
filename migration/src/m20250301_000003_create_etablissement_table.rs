use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Etablissement::Table)
                    .if_not_exists()
                    .col(pk_auto(Etablissement::Id))
                    .col(string(Etablissement::Nom))
                    .col(string(Etablissement::Adresse))
                    .col(string(Etablissement::Ville))
                    .col(string(Etablissement::Codepostal))
                    .col(string(Etablissement::Telephone))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Etablissement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Etablissement {
    Table,
    Id,
    Nom,
    Adresse,
    Ville,
    Codepostal,
    Telephone,
}
