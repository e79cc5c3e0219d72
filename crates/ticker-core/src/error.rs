//! Error types shared across the workspace

use thiserror::Error;

/// Result type alias for ticker-core
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for tool operations
#[derive(Error, Debug)]
pub enum Error {
    /// Generic error message
    #[error("{0}")]
    Generic(String),

    /// Tool input did not match its schema or failed validation
    #[error("Invalid tool parameters: {0}")]
    InvalidParams(String),

    /// Tool execution failed
    #[error("Tool execution failed: {0}")]
    Execution(String),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}
