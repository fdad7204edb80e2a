//! Stateless token verification.
//!
//! Verification walks decrypt, payload parse, freshness check and identity lookup in
//! that order. Nothing is stored server-side: a token is valid purely as a function
//! of its content and the clock.

use sea_orm::DatabaseConnection;

use crate::server::{
    config::TokenConfig,
    data::utilisateur::UtilisateurRepository,
    error::auth::AuthError,
    model::identity::Identity,
    service::token::{TokenCodec, TokenIssuer, TokenPayload},
};

/// Verifies inbound tokens against the configured cipher and policy.
pub struct TokenAuthenticator {
    codec: TokenCodec,
    config: TokenConfig,
}

impl TokenAuthenticator {
    /// Creates an authenticator, deriving the cipher from the token settings.
    ///
    /// # Arguments
    /// - `config` - Token settings loaded from the environment
    ///
    /// # Returns
    /// - `TokenAuthenticator` - Ready-to-use authenticator
    pub fn new(config: TokenConfig) -> Self {
        Self {
            codec: TokenCodec::new(&config.secret, &config.iv_seed),
            config,
        }
    }

    /// Whether tokens are checked at all.
    pub fn security_enabled(&self) -> bool {
        self.config.security
    }

    /// Issuer sharing this authenticator's cipher and settings, for the login flow.
    #[allow(dead_code)]
    pub fn issuer(&self) -> TokenIssuer<'_> {
        TokenIssuer::new(&self.codec, &self.config)
    }

    /// Decrypts a token and checks its freshness at time `now`.
    ///
    /// With a validity window configured, the payload must carry a numeric timestamp
    /// and `now - issued_at` must stay below the window.
    ///
    /// # Arguments
    /// - `token` - Raw header value
    /// - `now` - Current time in epoch seconds
    ///
    /// # Returns
    /// - `Ok(TokenPayload)` - Token decrypted and fresh
    /// - `Err(AuthError::InvalidToken)` - Decryption failed, or timestamp missing
    /// - `Err(AuthError::TokenExpired)` - Timestamp outside the window
    pub fn verify_at(&self, token: &str, now: i64) -> Result<TokenPayload, AuthError> {
        let plaintext = self
            .codec
            .decrypt(token, self.config.rounds)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;
        let payload = TokenPayload::parse(&plaintext, self.config.separator);

        if payload.subject.is_empty() {
            return Err(AuthError::InvalidToken("empty subject".to_string()));
        }

        if let Some(validity) = self.config.validity_seconds {
            let Some(issued_at) = payload.issued_at else {
                return Err(AuthError::InvalidToken("missing timestamp".to_string()));
            };

            if now.saturating_sub(issued_at) >= validity {
                return Err(AuthError::TokenExpired {
                    issued_at,
                    validity,
                });
            }
        }

        Ok(payload)
    }

    /// Verifies a token and resolves the identity it was issued to.
    ///
    /// # Arguments
    /// - `db` - Database connection for the identity lookup
    /// - `token` - Raw header value
    /// - `now` - Current time in epoch seconds
    ///
    /// # Returns
    /// - `Ok(Identity)` - Authenticated user
    /// - `Err(AuthError::UnknownIdentity)` - No user with the token's login
    /// - `Err(AuthError::Forbidden)` - User's profile is on the deny-list
    /// - `Err(AuthError)` - Any failure of `verify_at` or of the lookup query
    pub async fn authenticate(
        &self,
        db: &DatabaseConnection,
        token: &str,
        now: i64,
    ) -> Result<Identity, AuthError> {
        let payload = self.verify_at(token, now)?;

        let Some(identity) = UtilisateurRepository::new(db)
            .find_identity_by_login(&payload.subject)
            .await?
        else {
            return Err(AuthError::UnknownIdentity(payload.subject));
        };

        if self.config.unauthorized_profiles.contains(&identity.profil_id) {
            return Err(AuthError::Forbidden(identity.login, identity.profil_id));
        }

        Ok(identity)
    }
}
