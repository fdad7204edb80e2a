use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000003_create_etablissement_table::Etablissement,
    m20250301_000004_create_utilisateur_table::Utilisateur,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Point::Table)
                    .if_not_exists()
                    .col(pk_auto(Point::Id))
                    .col(string(Point::CoordonneesGps))
                    .col(string(Point::Description))
                    .col(string(Point::Titre))
                    .col(integer(Point::EtablissementId))
                    .col(integer(Point::UtilisateurId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_point_etablissement_id")
                            .from(Point::Table, Point::EtablissementId)
                            .to(Etablissement::Table, Etablissement::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_point_utilisateur_id")
                            .from(Point::Table, Point::UtilisateurId)
                            .to(Utilisateur::Table, Utilisateur::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Point::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Point {
    Table,
    Id,
    CoordonneesGps,
    Description,
    Titre,
    EtablissementId,
    UtilisateurId,
}
