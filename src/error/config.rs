use thiserror::Error;

/// Errors raised while loading configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is unset.
    ///
    /// Only `DATABASE_URL` has no default; everything else falls back to a
    /// built-in value when absent.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
