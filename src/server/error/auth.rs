use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Message returned for every 401, whichever verification stage failed.
const AUTHENTICATION_FAILED: &str = "Authentication failed";

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carries no token but the operation requires one.
    #[error("No authentication token provided")]
    MissingToken,

    /// The token could not be decrypted or its payload is malformed.
    ///
    /// # Fields
    /// - Stage that rejected the token, for server-side logs only
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// The token's timestamp is older than the configured validity window.
    #[error("Token issued at {issued_at} expired (validity {validity}s)")]
    TokenExpired { issued_at: i64, validity: i64 },

    /// No user matches the token subject.
    #[error("No user found for login {0}")]
    UnknownIdentity(String),

    /// The user's profile is on the configured deny-list.
    ///
    /// # Fields
    /// - User login
    /// - Profile id that was denied
    #[error("User {0} with profile {1} is not allowed to use the API")]
    Forbidden(String, i32),

    /// A token cannot be issued because the subject contains the payload separator.
    #[allow(dead_code)]
    #[error("Subject {0:?} contains the token separator")]
    SeparatorInSubject(String),

    /// Identity lookup failed at the database level.
    #[error("Identity lookup failed: {0}")]
    Lookup(#[from] sea_orm::DbErr),
}

/// Converts authentication errors into HTTP responses.
///
/// Token failures all map to the same 401 body so a client cannot tell whether
/// decryption, the timestamp check or the identity lookup rejected the token. The
/// actual stage is logged at debug level.
///
/// # Returns
/// - 401 Unauthorized - For missing, invalid, expired or unknown-identity tokens
/// - 403 Forbidden - For denied profiles
/// - 500 Internal Server Error - For lookup and issuance failures
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Authentication rejected: {}", self);

        match self {
            Self::MissingToken
            | Self::InvalidToken(_)
            | Self::TokenExpired { .. }
            | Self::UnknownIdentity(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: AUTHENTICATION_FAILED.to_string(),
                }),
            )
                .into_response(),
            Self::Forbidden(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Access denied".to_string(),
                }),
            )
                .into_response(),
            err @ (Self::SeparatorInSubject(_) | Self::Lookup(_)) => {
                super::InternalServerError(err).into_response()
            }
        }
    }
}

/// Failure of the symmetric token cipher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenCodecError {
    /// Base64, block padding or UTF-8 decoding failed in some round.
    #[error("Token decryption failed")]
    DecryptionFailed,
}
