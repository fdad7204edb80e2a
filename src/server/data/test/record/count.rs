use super::*;

/// Tests counting the rows matched by a listing.
///
/// Expected: Ok(3) for three vehicles, regardless of the page window
#[tokio::test]
async fn counts_all_matching_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let societe = factory::create_societe(db).await?;
    for _ in 0..3 {
        factory::create_voiture(db, societe.id).await?;
    }

    let registry = domain_registry();
    let mut spec = QuerySpec::new(registry.describe("Voiture").unwrap());
    spec.window(1, 0);
    let assembled = QueryAssembler::assemble(&spec, true).unwrap();

    let total = RecordRepository::new(db)
        .count(assembled.count.as_ref().unwrap())
        .await?;

    assert_eq!(total, 3);

    Ok(())
}

/// Tests counting an empty table.
///
/// Expected: Ok(0)
#[tokio::test]
async fn counts_zero_without_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let registry = domain_registry();
    let spec = QuerySpec::new(registry.describe("Profil").unwrap());
    let assembled = QueryAssembler::assemble(&spec, true).unwrap();

    let total = RecordRepository::new(db)
        .count(assembled.count.as_ref().unwrap())
        .await?;

    assert_eq!(total, 0);

    Ok(())
}
