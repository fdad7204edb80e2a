use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Societe::Table)
                    .if_not_exists()
                    .col(pk_auto(Societe::Id))
                    .col(string(Societe::Nom))
                    .col(string(Societe::Adresse))
                    .col(string(Societe::Ville))
                    .col(string(Societe::Codepostal))
                    .col(string(Societe::Telephone))
                    .col(string(Societe::Pays))
                    .col(string(Societe::Siren))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Societe::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Societe {
    Table,
    Id,
    Nom,
    Adresse,
    Ville,
    Codepostal,
    Telephone,
    Pays,
    Siren,
}
