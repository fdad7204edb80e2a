use super::*;

/// Tests authenticating a fresh token for an existing user.
///
/// Expected: Ok(Identity) for the token's login
#[tokio::test]
async fn resolves_identity_of_valid_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, profil, utilisateur) =
        factory::helpers::create_utilisateur_with_dependencies(db).await?;

    let authenticator = TokenAuthenticator::new(token_config(HashSet::new()));
    let token = authenticator.issuer().issue(&utilisateur.login, NOW).unwrap().token;

    let identity = authenticator.authenticate(db, &token, NOW + 60).await.unwrap();

    assert_eq!(identity.id, utilisateur.id);
    assert_eq!(identity.profil_id, profil.id);

    Ok(())
}

/// Tests a token whose login matches no user.
///
/// Expected: Err(UnknownIdentity)
#[tokio::test]
async fn rejects_unknown_login() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let authenticator = TokenAuthenticator::new(token_config(HashSet::new()));
    let token = authenticator.issuer().issue("ghost", NOW).unwrap().token;

    let result = authenticator.authenticate(db, &token, NOW).await;

    assert!(matches!(result, Err(AuthError::UnknownIdentity(login)) if login == "ghost"));

    Ok(())
}

/// Tests a valid token for a user whose profile is denied.
///
/// Expected: Err(Forbidden) after successful decryption
#[tokio::test]
async fn rejects_denied_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, profil, utilisateur) =
        factory::helpers::create_utilisateur_with_dependencies(db).await?;

    let authenticator = TokenAuthenticator::new(token_config(HashSet::from([profil.id])));
    let token = authenticator.issuer().issue(&utilisateur.login, NOW).unwrap().token;

    let result = authenticator.authenticate(db, &token, NOW).await;

    assert!(matches!(result, Err(AuthError::Forbidden(_, id)) if id == profil.id));

    Ok(())
}

/// Tests that an expired token is refused before any lookup.
///
/// Expected: Err(TokenExpired)
#[tokio::test]
async fn rejects_expired_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, utilisateur) = factory::helpers::create_utilisateur_with_dependencies(db).await?;

    let authenticator = TokenAuthenticator::new(token_config(HashSet::new()));
    let token = authenticator.issuer().issue(&utilisateur.login, NOW).unwrap().token;

    let result = authenticator.authenticate(db, &token, NOW + 3600).await;

    assert!(matches!(result, Err(AuthError::TokenExpired { .. })));

    Ok(())
}

/// Tests that garbage in the header is an invalid token.
///
/// Expected: Err(InvalidToken)
#[tokio::test]
async fn rejects_garbage_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let authenticator = TokenAuthenticator::new(token_config(HashSet::new()));

    let result = authenticator.authenticate(db, "AAAA", NOW).await;

    assert!(matches!(result, Err(AuthError::InvalidToken(_))));

    Ok(())
}
