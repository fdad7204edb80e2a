//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user together with the company and profile it belongs to.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((societe, profil, utilisateur))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_utilisateur_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::societe::Model,
        entity::profil::Model,
        entity::utilisateur::Model,
    ),
    DbErr,
> {
    let societe = crate::factory::societe::create_societe(db).await?;
    let profil = crate::factory::profil::create_profil(db).await?;
    let utilisateur =
        crate::factory::utilisateur::create_utilisateur(db, societe.id, profil.id).await?;

    Ok((societe, profil, utilisateur))
}
