use super::*;

/// Tests resolving a login to an identity with its profile.
///
/// Expected: Ok(Some(Identity)) carrying the profile id and name
#[tokio::test]
async fn finds_identity_with_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let societe = factory::create_societe(db).await?;
    let profil = factory::profil::ProfilFactory::new(db)
        .nom("Ambulancier")
        .build()
        .await?;
    let utilisateur = factory::utilisateur::UtilisateurFactory::new(db, societe.id, profil.id)
        .nom("Dupont")
        .login("jdupont")
        .build()
        .await?;

    let repo = UtilisateurRepository::new(db);
    let identity = repo.find_identity_by_login("jdupont").await?.unwrap();

    assert_eq!(identity.id, utilisateur.id);
    assert_eq!(identity.nom, "Dupont");
    assert_eq!(identity.profil_id, profil.id);
    assert_eq!(identity.profil_nom.as_deref(), Some("Ambulancier"));

    Ok(())
}

/// Tests that an unknown login resolves to nothing.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_login() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_utilisateur_with_dependencies(db).await?;

    let repo = UtilisateurRepository::new(db);
    let identity = repo.find_identity_by_login("nobody").await?;

    assert!(identity.is_none());

    Ok(())
}
