use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read brand roster at {path}: {source}")]
    RosterFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse brand roster: {0}")]
    RosterFileParse(#[from] serde_yaml::Error),

    #[error("brand roster validation failed: {0}")]
    Validation(String),
}
