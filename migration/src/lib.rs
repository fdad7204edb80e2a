pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_profil_table;
mod m20250301_000002_create_societe_table;
mod m20250301_000003_create_etablissement_table;
mod m20250301_000004_create_utilisateur_table;
mod m20250301_000005_create_voiture_table;
mod m20250301_000006_create_equipement_table;
mod m20250301_000007_create_reservation_table;
mod m20250301_000008_create_trajet_table;
mod m20250301_000009_create_point_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_profil_table::Migration),
            Box::new(m20250301_000002_create_societe_table::Migration),
            Box::new(m20250301_000003_create_etablissement_table::Migration),
            Box::new(m20250301_000004_create_utilisateur_table::Migration),
            Box::new(m20250301_000005_create_voiture_table::Migration),
            Box::new(m20250301_000006_create_equipement_table::Migration),
            Box::new(m20250301_000007_create_reservation_table::Migration),
            Box::new(m20250301_000008_create_trajet_table::Migration),
            Box::new(m20250301_000009_create_point_table::Migration),
        ]
    }
}
