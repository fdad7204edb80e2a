//! Symmetric token cipher, payload format and issuance.
//!
//! A token is `subject<separator>issued_at` encrypted with AES-256-CBC one or more
//! times and base64-encoded once at the end. The key is the first 32 characters of
//! the hex SHA-256 digest of the secret and the IV the first 16 characters of the hex
//! digest of the IV seed, so tokens interoperate with other implementations of the
//! same scheme.
//!
//! Issuance (`TokenIssuer`, `TokenCodec::encrypt`) is the boundary handed to the login
//! flow, which lives outside this backend; the server itself only verifies tokens.

use std::num::NonZeroU32;

use aes::Aes256;
use base64::{engine::general_purpose::STANDARD, Engine};
use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use sha2::{Digest, Sha256};

use crate::server::{
    config::TokenConfig,
    error::auth::{AuthError, TokenCodecError},
};

type Encryptor = cbc::Encryptor<Aes256>;
type Decryptor = cbc::Decryptor<Aes256>;

const KEY_LEN: usize = 32;
const IV_LEN: usize = 16;

/// AES-256-CBC cipher with a fixed key and IV.
#[derive(Clone)]
pub struct TokenCodec {
    key: [u8; KEY_LEN],
    iv: [u8; IV_LEN],
}

impl TokenCodec {
    /// Derives the key from `secret` and the IV from `iv_seed`.
    pub fn new(secret: &str, iv_seed: &str) -> Self {
        Self {
            key: hex_digest_prefix(secret),
            iv: hex_digest_prefix(iv_seed),
        }
    }

    /// Encrypts `plaintext` `rounds` times and base64-encodes the result.
    ///
    /// # Arguments
    /// - `plaintext` - Serialized payload
    /// - `rounds` - Number of times the cipher is applied
    ///
    /// # Returns
    /// - `String` - Base64 token
    #[allow(dead_code)]
    pub fn encrypt(&self, plaintext: &str, rounds: NonZeroU32) -> String {
        let mut data = plaintext.as_bytes().to_vec();

        for _ in 0..rounds.get() {
            data = Encryptor::new(&self.key.into(), &self.iv.into())
                .encrypt_padded_vec_mut::<Pkcs7>(&data);
        }

        STANDARD.encode(data)
    }

    /// Base64-decodes `token` and decrypts it `rounds` times.
    ///
    /// Decrypting with a round count other than the one used to encrypt fails in one
    /// of the rounds or leaves bytes that are not valid UTF-8.
    ///
    /// # Returns
    /// - `Ok(String)` - Plaintext payload
    /// - `Err(TokenCodecError::DecryptionFailed)` - Bad base64, padding or UTF-8
    pub fn decrypt(&self, token: &str, rounds: NonZeroU32) -> Result<String, TokenCodecError> {
        let mut data = STANDARD
            .decode(token.trim())
            .map_err(|_| TokenCodecError::DecryptionFailed)?;

        for _ in 0..rounds.get() {
            data = Decryptor::new(&self.key.into(), &self.iv.into())
                .decrypt_padded_vec_mut::<Pkcs7>(&data)
                .map_err(|_| TokenCodecError::DecryptionFailed)?;
        }

        String::from_utf8(data).map_err(|_| TokenCodecError::DecryptionFailed)
    }
}

/// First `N` characters of the lowercase hex SHA-256 digest of `input`.
fn hex_digest_prefix<const N: usize>(input: &str) -> [u8; N] {
    let hex = format!("{:x}", Sha256::digest(input.as_bytes()));
    let mut out = [0u8; N];
    out.copy_from_slice(&hex.as_bytes()[..N]);
    out
}

/// Decrypted content of a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPayload {
    /// User login.
    pub subject: String,
    /// Issuance time in epoch seconds; absent, or unreadable, when not provided.
    pub issued_at: Option<i64>,
}

impl TokenPayload {
    /// Joins subject and timestamp with `separator`. Without a timestamp only the
    /// subject is written.
    #[allow(dead_code)]
    pub fn to_plaintext(&self, separator: char) -> String {
        match self.issued_at {
            Some(issued_at) => format!("{}{}{}", self.subject, separator, issued_at),
            None => self.subject.clone(),
        }
    }

    /// Splits a plaintext payload at the first `separator`.
    pub fn parse(plaintext: &str, separator: char) -> Self {
        let mut parts = plaintext.splitn(2, separator);
        let subject = parts.next().unwrap_or_default().to_string();
        let issued_at = parts.next().and_then(|ts| ts.trim().parse::<i64>().ok());

        Self { subject, issued_at }
    }
}

/// Token handed to a client at login.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    /// Timestamp embedded in the token, when freshness checking is enabled.
    pub issued_at: Option<i64>,
}

/// Builds and encrypts tokens for the login flow.
#[allow(dead_code)]
pub struct TokenIssuer<'a> {
    codec: &'a TokenCodec,
    config: &'a TokenConfig,
}

#[allow(dead_code)]
impl<'a> TokenIssuer<'a> {
    pub fn new(codec: &'a TokenCodec, config: &'a TokenConfig) -> Self {
        Self { codec, config }
    }

    /// Issues a token for `subject` at time `now`.
    ///
    /// The timestamp is embedded only when a validity window is configured.
    ///
    /// # Arguments
    /// - `subject` - User login
    /// - `now` - Current time in epoch seconds
    ///
    /// # Returns
    /// - `Ok(IssuedToken)` - Encrypted token and its timestamp
    /// - `Err(AuthError::SeparatorInSubject)` - Subject contains the separator
    pub fn issue(&self, subject: &str, now: i64) -> Result<IssuedToken, AuthError> {
        if subject.contains(self.config.separator) {
            return Err(AuthError::SeparatorInSubject(subject.to_string()));
        }

        let payload = TokenPayload {
            subject: subject.to_string(),
            issued_at: self.config.validity_seconds.map(|_| now),
        };
        let token = self
            .codec
            .encrypt(&payload.to_plaintext(self.config.separator), self.config.rounds);

        Ok(IssuedToken {
            token,
            issued_at: payload.issued_at,
        })
    }
}
