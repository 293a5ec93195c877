use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("unknown timezone `{0}`")]
    UnknownTimezone(String),
    #[error("failed to read prompt {}", path.display())]
    ReadPrompt {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

/// Convenience result type used throughout this crate.
pub type Result<T> = std::result::Result<T, AgentError>;
