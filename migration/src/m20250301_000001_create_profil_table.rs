use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profil::Table)
                    .if_not_exists()
                    .col(pk_auto(Profil::Id))
                    .col(string(Profil::Nom))
                    .col(string(Profil::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profil::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Profil {
    Table,
    Id,
    Nom,
    Description,
}
