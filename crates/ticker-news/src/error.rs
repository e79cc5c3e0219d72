//! Error types for the news module

use thiserror::Error;

/// Errors that can occur in the news module
#[derive(Debug, Error)]
pub enum NewsError {
    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request failed before a response was received (DNS, refused, timeout)
    #[error("Request error: {0}")]
    Transport(String),

    /// API returned a non-success status
    #[error("HTTP error: {status} - {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body from the API
        body: String,
    },
}

/// Convert NewsError to ticker_core::Error
impl From<NewsError> for ticker_core::Error {
    fn from(err: NewsError) -> Self {
        match err {
            NewsError::Config(msg) => ticker_core::Error::Config(msg),
            other => ticker_core::Error::Execution(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NewsError::Http {
            status: 500,
            body: "upstream down".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP error: 500 - upstream down");
    }

    #[test]
    fn test_config_error_maps_to_core_config() {
        let err = NewsError::Config("TAVILY_API_URL is not set".to_string());
        let core: ticker_core::Error = err.into();
        assert!(matches!(core, ticker_core::Error::Config(_)));
    }
}
