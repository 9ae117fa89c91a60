use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check `.env.example` for the required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but cannot be interpreted.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidValue {
        /// Name of the offending variable
        name: String,
        /// The raw value that was rejected
        value: String,
        /// Why the value was rejected
        reason: String,
    },
}
