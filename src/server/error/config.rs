use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check `.env.example` for the list of required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be parsed.
    ///
    /// # Fields
    /// - Name of the variable
    /// - Reason the value was rejected
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}
