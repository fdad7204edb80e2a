use super::*;

/// Tests that rows are decoded by field name with typed JSON values.
///
/// Verifies strings, integers, booleans and the relation id of a vehicle.
///
/// Expected: Ok(vec![record]) with every declared column
#[tokio::test]
async fn decodes_rows_by_field_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let societe = factory::create_societe(db).await?;
    let voiture = factory::voiture::VoitureFactory::new(db, societe.id)
        .marque("Renault")
        .type_voiture("VSL")
        .annee(2019)
        .disponible(false)
        .build()
        .await?;

    let registry = domain_registry();
    let descriptor = registry.describe("Voiture").unwrap();
    let assembled = QueryAssembler::assemble(&QuerySpec::new(descriptor), false).unwrap();

    let repo = RecordRepository::new(db);
    let rows = repo.fetch(descriptor, &assembled.data).await?;

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row["id"], json!(voiture.id));
    assert_eq!(row["marque"], json!("Renault"));
    assert_eq!(row["typeVoiture"], json!("VSL"));
    assert_eq!(row["annee"], json!(2019));
    assert_eq!(row["disponible"], json!(false));
    assert_eq!(row["societe"], json!(societe.id));
    assert!(!row.contains_key("equipements"));

    Ok(())
}

/// Tests that dates, times and null columns are rendered for the wire.
///
/// Expected: ISO date, `HH:MM:SS` time, and null for an unset column
#[tokio::test]
async fn renders_temporal_and_null_values() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (societe, _, utilisateur) =
        factory::helpers::create_utilisateur_with_dependencies(db).await?;
    let etablissement = factory::create_etablissement(db).await?;
    factory::create_reservation(db, etablissement.id, societe.id, utilisateur.id).await?;

    let registry = domain_registry();

    let reservations = registry.describe("Reservation").unwrap();
    let assembled = QueryAssembler::assemble(&QuerySpec::new(reservations), false).unwrap();
    let rows = RecordRepository::new(db)
        .fetch(reservations, &assembled.data)
        .await?;

    assert_eq!(rows[0]["dateRdv"], json!("2024-03-15"));
    assert_eq!(rows[0]["heureRdv"], json!("09:30:00"));

    let utilisateurs = registry.describe("Utilisateur").unwrap();
    let assembled = QueryAssembler::assemble(&QuerySpec::new(utilisateurs), false).unwrap();
    let rows = RecordRepository::new(db)
        .fetch(utilisateurs, &assembled.data)
        .await?;

    assert_eq!(rows[0]["datenaissance"], json!("1980-01-01"));
    assert_eq!(rows[0]["antecedents"], json!(null));
    assert!(!rows[0].contains_key("password"));

    Ok(())
}

/// Tests that rows are returned in the order of a relation sort.
///
/// Vehicles are sorted by the city of their company, which requires a join.
///
/// Expected: vehicles of the Lyon company before those of the Paris company
#[tokio::test]
async fn orders_rows_by_relation_field() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let paris = factory::societe::SocieteFactory::new(db).ville("Paris").build().await?;
    let lyon = factory::societe::SocieteFactory::new(db).ville("Lyon").build().await?;
    let in_paris = factory::create_voiture(db, paris.id).await?;
    let in_lyon = factory::create_voiture(db, lyon.id).await?;

    let registry = domain_registry();
    let descriptor = registry.describe("Voiture").unwrap();
    let mut spec = QuerySpec::new(descriptor);
    spec.sort_by(
        SortParser::new(&registry)
            .parse("Voiture", "societe.ville ASC")
            .unwrap(),
    )
    .unwrap();
    let assembled = QueryAssembler::assemble(&spec, false).unwrap();

    let rows = RecordRepository::new(db).fetch(descriptor, &assembled.data).await?;

    let ids: Vec<_> = rows.iter().map(|row| row["id"].clone()).collect();
    assert_eq!(ids, vec![json!(in_lyon.id), json!(in_paris.id)]);

    Ok(())
}
