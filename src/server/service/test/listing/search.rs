use super::*;

async fn seed_users(db: &DatabaseConnection) -> Result<entity::utilisateur::Model, DbErr> {
    let societe = factory::create_societe(db).await?;
    let profil = factory::create_profil(db).await?;

    let dupont = factory::utilisateur::UtilisateurFactory::new(db, societe.id, profil.id)
        .nom("Dupont")
        .login("jdupont")
        .build()
        .await?;
    factory::utilisateur::UtilisateurFactory::new(db, societe.id, profil.id)
        .nom("Martin")
        .login("pmartin")
        .build()
        .await?;

    Ok(dupont)
}

/// Tests a case-insensitive substring search.
///
/// Expected: "dup" and "DUP" both match Dupont only
#[tokio::test]
async fn matches_case_insensitive_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dupont = seed_users(db).await?;

    for text in ["dup", "DUP"] {
        let result = list(db, "utilisateurs", &[("filter_text", text)]).await.unwrap();

        assert_eq!(ids(&result), vec![json!(dupont.id)], "text {}", text);
    }

    Ok(())
}

/// Tests that case folding covers accented letters.
///
/// Expected: every spelling of "école" or "étienne" matches the school
#[tokio::test]
async fn matches_accented_text_in_any_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ecole = factory::etablissement::EtablissementFactory::new(db)
        .nom("École Saint-Étienne")
        .build()
        .await?;
    factory::etablissement::EtablissementFactory::new(db)
        .nom("Clinique du Parc")
        .build()
        .await?;

    for text in ["école", "ÉCOLE", "École", "étienne", "Étienne", "cole"] {
        let result = list(db, "etablissements", &[("filter_text", text)])
            .await
            .unwrap();

        assert_eq!(ids(&result), vec![json!(ecole.id)], "text {}", text);
    }

    Ok(())
}

/// Tests that glob metacharacters in the search text are matched literally.
///
/// Expected: "*" and "?" match nothing since no value contains them
#[tokio::test]
async fn glob_metacharacters_are_literal() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_users(db).await?;

    for text in ["*", "?", "D*t"] {
        let result = list(db, "utilisateurs", &[("filter_text", text)]).await.unwrap();

        assert!(result.rows.is_empty(), "text {}", text);
    }

    Ok(())
}

/// Tests a search that no row contains.
///
/// Expected: no rows and the empty envelope
#[tokio::test]
async fn longer_text_does_not_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_users(db).await?;

    let result = list(db, "utilisateurs", &[("filter_text", "Dupontx")])
        .await
        .unwrap();

    assert!(result.rows.is_empty());
    assert_eq!(serde_json::to_string(&result.into_dto()).unwrap(), "{}");

    Ok(())
}

/// Tests that search reaches the fields of a direct relation.
///
/// Expected: vehicles of the Lyon company only
#[tokio::test]
async fn matches_related_entity_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let lyon = factory::societe::SocieteFactory::new(db).ville("Lyon").build().await?;
    let paris = factory::societe::SocieteFactory::new(db).ville("Paris").build().await?;
    let in_lyon = factory::create_voiture(db, lyon.id).await?;
    factory::create_voiture(db, paris.id).await?;

    let result = list(db, "voitures", &[("filter_text", "lyon")]).await.unwrap();

    assert_eq!(ids(&result), vec![json!(in_lyon.id)]);

    Ok(())
}

/// Tests that wildcard characters in the search text are matched literally.
///
/// Expected: "%" matches nothing since no value contains a percent sign
#[tokio::test]
async fn wildcards_are_literal() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_users(db).await?;

    let result = list(db, "utilisateurs", &[("filter_text", "%")]).await.unwrap();

    assert!(result.rows.is_empty());

    Ok(())
}

/// Tests a date search on a date field.
///
/// Expected: only the reservation on that day
#[tokio::test]
async fn matches_reservation_day() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (societe, _, utilisateur) =
        factory::helpers::create_utilisateur_with_dependencies(db).await?;
    let etablissement = factory::create_etablissement(db).await?;
    let on_day = factory::reservation::ReservationFactory::new(
        db,
        etablissement.id,
        societe.id,
        utilisateur.id,
    )
    .date_rdv(chrono::NaiveDate::from_ymd_opt(2024, 5, 2).unwrap())
    .build()
    .await?;
    factory::reservation::ReservationFactory::new(db, etablissement.id, societe.id, utilisateur.id)
        .date_rdv(chrono::NaiveDate::from_ymd_opt(2024, 5, 3).unwrap())
        .build()
        .await?;

    let result = list(db, "reservations", &[("filter_text", "02/05/2024")])
        .await
        .unwrap();

    assert_eq!(ids(&result), vec![json!(on_day.id)]);

    Ok(())
}
