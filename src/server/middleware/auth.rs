use axum::http::HeaderMap;
use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::identity::Identity,
    service::auth::TokenAuthenticator,
};

/// Header carrying the encrypted token.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Whether an operation can run without a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRequirement {
    Required,
    /// Anonymous requests pass; a token that is present must still be valid.
    ///
    /// Every current route requires a token.
    #[allow(dead_code)]
    Optional,
}

pub struct AuthGuard<'a> {
    authenticator: &'a TokenAuthenticator,
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        authenticator: &'a TokenAuthenticator,
        db: &'a DatabaseConnection,
        headers: &'a HeaderMap,
    ) -> Self {
        Self {
            authenticator,
            db,
            headers,
        }
    }

    /// Authenticates the request against the current clock.
    ///
    /// # Returns
    /// - `Ok(Some(Identity))` - Token verified
    /// - `Ok(None)` - Security disabled, or optional and no token sent
    /// - `Err(AppError::AuthErr)` - Token missing when required, or rejected
    pub async fn require(&self, requirement: AuthRequirement) -> Result<Option<Identity>, AppError> {
        self.require_at(requirement, Utc::now().timestamp()).await
    }

    /// Authenticates the request as of `now` (epoch seconds).
    pub async fn require_at(
        &self,
        requirement: AuthRequirement,
        now: i64,
    ) -> Result<Option<Identity>, AppError> {
        if !self.authenticator.security_enabled() {
            return Ok(None);
        }

        let token = self
            .headers
            .get(AUTH_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty());

        let Some(token) = token else {
            return match requirement {
                AuthRequirement::Required => Err(AuthError::MissingToken.into()),
                AuthRequirement::Optional => Ok(None),
            };
        };

        let identity = self.authenticator.authenticate(self.db, token, now).await?;
        tracing::debug!(
            "Authenticated {} ({} {}) with profile {} {:?}",
            identity.login,
            identity.prenom,
            identity.nom,
            identity.profil_id,
            identity.profil_nom
        );

        Ok(Some(identity))
    }
}
