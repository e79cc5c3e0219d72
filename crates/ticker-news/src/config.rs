//! News client configuration

use crate::error::NewsError;
use url::Url;

/// Environment variable holding the Tavily endpoint
pub const API_URL_VAR: &str = "TAVILY_API_URL";
/// Environment variable holding the Tavily bearer token
pub const API_KEY_VAR: &str = "TAVILY_API_KEY";

/// Validated configuration for the news client
///
/// Built once at startup so a missing endpoint or token fails the process
/// before it starts serving, instead of surfacing on the first call.
#[derive(Debug, Clone)]
pub struct NewsConfig {
    pub api_url: Url,
    pub api_key: String,
}

impl NewsConfig {
    /// Create a configuration from raw endpoint and token values
    pub fn new(api_url: &str, api_key: &str) -> Result<Self, NewsError> {
        let api_url = Url::parse(api_url)
            .map_err(|e| NewsError::Config(format!("{API_URL_VAR} is not a valid URL: {e}")))?;

        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(NewsError::Config(format!("{API_KEY_VAR} must not be empty")));
        }

        Ok(Self {
            api_url,
            api_key: api_key.to_string(),
        })
    }

    /// Load the configuration from the environment
    pub fn from_env() -> Result<Self, NewsError> {
        let api_url = std::env::var(API_URL_VAR)
            .map_err(|_| NewsError::Config(format!("{API_URL_VAR} is not set")))?;
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| NewsError::Config(format!("{API_KEY_VAR} is not set")))?;

        Self::new(&api_url, &api_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = NewsConfig::new("https://api.tavily.com/search", "tvly-test").unwrap();
        assert_eq!(config.api_url.as_str(), "https://api.tavily.com/search");
        assert_eq!(config.api_key, "tvly-test");
    }

    #[test]
    fn test_rejects_invalid_url() {
        let err = NewsConfig::new("not a url", "tvly-test").unwrap_err();
        assert!(matches!(err, NewsError::Config(_)));
        assert!(err.to_string().contains(API_URL_VAR));
    }

    #[test]
    fn test_rejects_empty_key() {
        let err = NewsConfig::new("https://api.tavily.com/search", "   ").unwrap_err();
        assert!(matches!(err, NewsError::Config(_)));
        assert!(err.to_string().contains(API_KEY_VAR));
    }
}
