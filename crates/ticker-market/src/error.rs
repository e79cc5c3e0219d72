//! Error types for market data operations

use thiserror::Error;

/// Market data specific errors
#[derive(Debug, Error)]
pub enum MarketError {
    /// Yahoo Finance API error
    #[error("Yahoo Finance error: {0}")]
    Yahoo(String),

    /// Provider returned a payload that could not be interpreted
    #[error("Malformed market data for {symbol}: {reason}")]
    Malformed { symbol: String, reason: String },
}

/// Result type alias for market operations
pub type Result<T> = std::result::Result<T, MarketError>;

/// Convert MarketError to ticker_core::Error
impl From<MarketError> for ticker_core::Error {
    fn from(err: MarketError) -> Self {
        ticker_core::Error::Execution(err.to_string())
    }
}
