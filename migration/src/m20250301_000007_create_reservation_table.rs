use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000002_create_societe_table::Societe,
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
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(date(Reservation::DateRdv))
                    .col(time(Reservation::HeureRdv))
                    .col(string(Reservation::Bontransport))
                    .col(string(Reservation::TypeSejour))
                    .col(string(Reservation::Etat))
                    .col(integer(Reservation::EtablissementId))
                    .col(integer(Reservation::SocieteId))
                    .col(integer(Reservation::UtilisateurId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_etablissement_id")
                            .from(Reservation::Table, Reservation::EtablissementId)
                            .to(Etablissement::Table, Etablissement::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_societe_id")
                            .from(Reservation::Table, Reservation::SocieteId)
                            .to(Societe::Table, Societe::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_utilisateur_id")
                            .from(Reservation::Table, Reservation::UtilisateurId)
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
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    DateRdv,
    HeureRdv,
    Bontransport,
    TypeSejour,
    Etat,
    EtablissementId,
    SocieteId,
    UtilisateurId,
}
