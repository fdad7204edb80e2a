use super::*;

/// Tests a request carrying a valid token.
///
/// Expected: Ok(Some(Identity)) for the token's user
#[tokio::test]
async fn resolves_identity_from_header() -> Result<(), AppError> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, utilisateur) = factory::helpers::create_utilisateur_with_dependencies(db).await?;

    let authenticator = authenticator(true);
    let token = authenticator.issuer().issue(&utilisateur.login, NOW).unwrap().token;
    let headers = headers_with_token(&token);

    let guard = AuthGuard::new(&authenticator, db, &headers);
    let identity = guard.require_at(AuthRequirement::Required, NOW).await?;

    assert_eq!(identity.map(|i| i.id), Some(utilisateur.id));

    Ok(())
}

/// Tests a required operation called without a token.
///
/// Expected: Err(AuthErr(MissingToken))
#[tokio::test]
async fn rejects_missing_token_when_required() -> Result<(), AppError> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let authenticator = authenticator(true);
    let headers = HeaderMap::new();

    let guard = AuthGuard::new(&authenticator, db, &headers);
    let result = guard.require_at(AuthRequirement::Required, NOW).await;

    assert!(matches!(result, Err(AppError::AuthErr(AuthError::MissingToken))));

    Ok(())
}

/// Tests an optional operation called without a token.
///
/// Expected: Ok(None)
#[tokio::test]
async fn passes_anonymous_when_optional() -> Result<(), AppError> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let authenticator = authenticator(true);
    let headers = HeaderMap::new();

    let guard = AuthGuard::new(&authenticator, db, &headers);
    let result = guard.require_at(AuthRequirement::Optional, NOW).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that an invalid token is refused even for optional operations.
///
/// Expected: Err(AuthErr(InvalidToken))
#[tokio::test]
async fn rejects_invalid_token_when_optional() -> Result<(), AppError> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let authenticator = authenticator(true);
    let headers = headers_with_token("bm90LWEtdG9rZW4=");

    let guard = AuthGuard::new(&authenticator, db, &headers);
    let result = guard.require_at(AuthRequirement::Optional, NOW).await;

    assert!(matches!(result, Err(AppError::AuthErr(AuthError::InvalidToken(_)))));

    Ok(())
}

/// Tests that disabling token security lets every request through.
///
/// Expected: Ok(None) without any token
#[tokio::test]
async fn passes_everything_when_security_disabled() -> Result<(), AppError> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let authenticator = authenticator(false);
    let headers = HeaderMap::new();

    let guard = AuthGuard::new(&authenticator, db, &headers);
    let result = guard.require_at(AuthRequirement::Required, NOW).await?;

    assert!(result.is_none());

    Ok(())
}
