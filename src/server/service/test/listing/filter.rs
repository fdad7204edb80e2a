use super::*;

/// Tests inclusion and exclusion filters together.
///
/// Expected: only the available Renault
#[tokio::test]
async fn combines_inclusion_and_exclusion() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let societe = factory::create_societe(db).await?;
    let available = factory::voiture::VoitureFactory::new(db, societe.id)
        .marque("Renault")
        .build()
        .await?;
    factory::voiture::VoitureFactory::new(db, societe.id)
        .marque("Renault")
        .disponible(false)
        .build()
        .await?;
    factory::voiture::VoitureFactory::new(db, societe.id)
        .marque("Peugeot")
        .build()
        .await?;

    let result = list(
        db,
        "voitures",
        &[("marque", "Renault"), ("except", r#"{"disponible": false}"#)],
    )
    .await
    .unwrap();

    assert_eq!(ids(&result), vec![json!(available.id)]);

    Ok(())
}

/// Tests filtering on a field of a related entity.
///
/// Expected: only vehicles whose company is in Lyon
#[tokio::test]
async fn filters_through_relation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let lyon = factory::societe::SocieteFactory::new(db).ville("Lyon").build().await?;
    let paris = factory::societe::SocieteFactory::new(db).ville("Paris").build().await?;
    let in_lyon = factory::create_voiture(db, lyon.id).await?;
    factory::create_voiture(db, paris.id).await?;

    let result = list(db, "voitures", &[("societe.ville", "Lyon")]).await.unwrap();

    assert_eq!(ids(&result), vec![json!(in_lyon.id)]);

    Ok(())
}

/// Tests that excluding null keeps only rows where the column is set.
///
/// Expected: only the equipment attached to a vehicle
#[tokio::test]
async fn excluding_null_keeps_set_values() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let societe = factory::create_societe(db).await?;
    let voiture = factory::create_voiture(db, societe.id).await?;
    let attached = factory::create_equipement(db, Some(voiture.id)).await?;
    factory::create_equipement(db, None).await?;

    let result = list(db, "equipements", &[("except", r#"{"voiture": null}"#)])
        .await
        .unwrap();

    assert_eq!(ids(&result), vec![json!(attached.id)]);

    Ok(())
}

/// Tests that rows with an unset relation survive a relation sort.
///
/// Expected: both equipments listed
#[tokio::test]
async fn relation_sort_keeps_rows_without_relation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let societe = factory::create_societe(db).await?;
    let voiture = factory::create_voiture(db, societe.id).await?;
    factory::create_equipement(db, Some(voiture.id)).await?;
    factory::create_equipement(db, None).await?;

    let result = list(db, "equipements", &[("orderBy", "voiture.marque ASC")])
        .await
        .unwrap();

    assert_eq!(result.rows.len(), 2);

    Ok(())
}

/// Tests extra criteria supplied by service code.
///
/// Expected: the extra predicate narrows the listing like an inclusion filter
#[tokio::test]
async fn applies_extra_criteria() -> Result<(), DbErr> {
    use crate::server::query::{
        predicate::{ColumnRef, Predicate},
        spec::QueryFragment,
    };

    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let societe = factory::create_societe(db).await?;
    let recent = factory::voiture::VoitureFactory::new(db, societe.id)
        .annee(2023)
        .build()
        .await?;
    factory::voiture::VoitureFactory::new(db, societe.id)
        .annee(2010)
        .build()
        .await?;

    let mut extra = QueryFragment::new();
    extra.predicates.push(Predicate::between(
        ColumnRef::new("a", "annee"),
        sea_orm::Value::from(2020i64),
        sea_orm::Value::from(2030i64),
    ));

    let registry = domain_registry();
    let config = QueryConfig::default();
    let result = ListService::new(db, &registry, &config)
        .list_with("voitures", params(&[]), extra)
        .await
        .unwrap();

    assert_eq!(ids(&result), vec![json!(recent.id)]);

    Ok(())
}

/// Tests an unregistered resource name.
///
/// Expected: Err(UnknownEntity)
#[tokio::test]
async fn rejects_unknown_resource() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = list(db, "avions", &[]).await;

    assert_eq!(result, Err(QueryError::UnknownEntity("avions".to_string())));

    Ok(())
}

/// Tests that a failing statement is reported as an execution failure.
///
/// The database has no tables, so the statement itself is valid but cannot run.
///
/// Expected: Err(QueryExecutionFailed)
#[tokio::test]
async fn reports_execution_failure() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = list(db, "voitures", &[]).await;

    assert!(matches!(result, Err(QueryError::QueryExecutionFailed(_))));

    Ok(())
}
