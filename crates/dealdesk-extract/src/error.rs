use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The request had the wrong shape or types; nothing was extracted.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("malformed request JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
}
