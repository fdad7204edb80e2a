use std::{collections::HashSet, num::NonZeroU32, str::FromStr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_TOKEN_SEPARATOR: char = '|';
const DEFAULT_TOKEN_ROUNDS: u32 = 2;
const DEFAULT_PAGE_SIZE: u64 = 20;
const DEFAULT_QUERY_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_TRUE_TOKENS: &str = "true,vrai,oui";
const DEFAULT_FALSE_TOKENS: &str = "false,faux,non";

/// Token protocol settings.
#[derive(Clone, Debug)]
pub struct TokenConfig {
    /// Secret hashed into the cipher key.
    pub secret: String,
    /// Constant hashed into the cipher IV.
    pub iv_seed: String,
    pub separator: char,
    pub rounds: NonZeroU32,
    /// Freshness window in seconds. `None` disables the timestamp check.
    pub validity_seconds: Option<i64>,
    /// Global switch; when false every request passes unauthenticated.
    pub security: bool,
    /// Profile ids refused even with a valid token.
    pub unauthorized_profiles: HashSet<i32>,
}

/// Listing and text-search settings.
#[derive(Clone, Debug)]
pub struct QueryConfig {
    pub default_page_size: u64,
    pub timeout: Duration,
    pub true_tokens: Vec<String>,
    pub false_tokens: Vec<String>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            timeout: Duration::from_secs(DEFAULT_QUERY_TIMEOUT_SECONDS),
            true_tokens: split_list(DEFAULT_TRUE_TOKENS),
            false_tokens: split_list(DEFAULT_FALSE_TOKENS),
        }
    }
}

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub token: TokenConfig,
    pub query: QueryConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let validity_seconds = optional_parsed::<i64>("TOKEN_VALIDITY_SECONDS")?.filter(|v| *v > 0);

        let rounds = optional_parsed::<u32>("TOKEN_ROUNDS")?.unwrap_or(DEFAULT_TOKEN_ROUNDS);
        let rounds = NonZeroU32::new(rounds).ok_or_else(|| {
            ConfigError::InvalidEnvVar("TOKEN_ROUNDS".to_string(), "must be at least 1".to_string())
        })?;

        let separator = match std::env::var("TOKEN_SEPARATOR") {
            Ok(value) => {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c,
                    _ => {
                        return Err(ConfigError::InvalidEnvVar(
                            "TOKEN_SEPARATOR".to_string(),
                            "must be a single character".to_string(),
                        )
                        .into())
                    }
                }
            }
            Err(_) => DEFAULT_TOKEN_SEPARATOR,
        };

        let unauthorized_profiles = split_list(&std::env::var("UNAUTHORIZED_PROFILES").unwrap_or_default())
            .iter()
            .map(|id| {
                id.parse::<i32>().map_err(|e| {
                    ConfigError::InvalidEnvVar("UNAUTHORIZED_PROFILES".to_string(), e.to_string())
                })
            })
            .collect::<Result<HashSet<_>, _>>()?;

        let default_page_size =
            optional_parsed::<u64>("DEFAULT_PAGE_SIZE")?.unwrap_or(DEFAULT_PAGE_SIZE);
        if default_page_size == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "DEFAULT_PAGE_SIZE".to_string(),
                "must be greater than 0".to_string(),
            )
            .into());
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            token: TokenConfig {
                secret: required("TOKEN_SECRET")?,
                iv_seed: required("TOKEN_IV_SEED")?,
                separator,
                rounds,
                validity_seconds,
                security: optional_parsed::<bool>("TOKEN_SECURITY")?.unwrap_or(true),
                unauthorized_profiles,
            },
            query: QueryConfig {
                default_page_size,
                timeout: Duration::from_secs(
                    optional_parsed::<u64>("QUERY_TIMEOUT_SECONDS")?
                        .unwrap_or(DEFAULT_QUERY_TIMEOUT_SECONDS),
                ),
                true_tokens: split_list(
                    &std::env::var("SEARCH_TRUE_TOKENS")
                        .unwrap_or_else(|_| DEFAULT_TRUE_TOKENS.to_string()),
                ),
                false_tokens: split_list(
                    &std::env::var("SEARCH_FALSE_TOKENS")
                        .unwrap_or_else(|_| DEFAULT_FALSE_TOKENS.to_string()),
                ),
            },
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_parsed<T>(name: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidEnvVar(name.to_string(), e.to_string())),
        Err(_) => Ok(None),
    }
}

/// Splits a comma-separated list, trimming and lowercasing entries and dropping empty ones.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}
