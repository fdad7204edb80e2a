use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000004_create_utilisateur_table::Utilisateur,
    m20250301_000005_create_voiture_table::Voiture,
    m20250301_000007_create_reservation_table::Reservation,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trajet::Table)
                    .if_not_exists()
                    .col(pk_auto(Trajet::Id))
                    .col(string(Trajet::Etat))
                    .col(double_null(Trajet::Distance))
                    .col(timestamp_null(Trajet::Depart))
                    .col(integer(Trajet::AmbulancierId))
                    .col(integer(Trajet::ReservationId))
                    .col(integer(Trajet::VoitureId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trajet_ambulancier_id")
                            .from(Trajet::Table, Trajet::AmbulancierId)
                            .to(Utilisateur::Table, Utilisateur::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trajet_reservation_id")
                            .from(Trajet::Table, Trajet::ReservationId)
                            .to(Reservation::Table, Reservation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trajet_voiture_id")
                            .from(Trajet::Table, Trajet::VoitureId)
                            .to(Voiture::Table, Voiture::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trajet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Trajet {
    Table,
    Id,
    Etat,
    Distance,
    Depart,
    AmbulancierId,
    ReservationId,
    VoitureId,
}
