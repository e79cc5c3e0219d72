//! Current-price resolution with the info-record fallback

use crate::error::Result;
use crate::provider::MarketData;
use serde_json::{Value, json};

/// Outcome of a price lookup
///
/// The non-price variants carry the exact sentence the host receives, so
/// composing code pattern-matches instead of sniffing payload types.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceResolution {
    /// Latest price, untruncated
    Price(f64),
    /// The provider had no data for the symbol
    Unavailable(String),
    /// The provider call itself failed
    Failed(String),
}

impl PriceResolution {
    /// The numeric price, when one was resolved
    pub fn price(&self) -> Option<f64> {
        match self {
            Self::Price(p) => Some(*p),
            Self::Unavailable(_) | Self::Failed(_) => None,
        }
    }

    /// Host-facing payload: a JSON number, or the descriptive sentence
    pub fn into_value(self) -> Value {
        match self {
            Self::Price(p) => json!(p),
            Self::Unavailable(msg) | Self::Failed(msg) => Value::String(msg),
        }
    }
}

/// Resolve the current price for a symbol
///
/// Tries the most recent trading day of history first and uses the closing
/// price of its last row. When the series is empty, falls back to the
/// provider's `regularMarketPrice` field. Provider failures are absorbed
/// into [`PriceResolution::Failed`]; this function never errors.
pub async fn resolve_price(provider: &dyn MarketData, symbol: &str) -> PriceResolution {
    match lookup(provider, symbol).await {
        Ok(Some(price)) => PriceResolution::Price(price),
        Ok(None) => {
            PriceResolution::Unavailable(format!("No price data available for {symbol}"))
        }
        Err(e) => {
            PriceResolution::Failed(format!("Error fetching stock price for {symbol}: {e}"))
        }
    }
}

async fn lookup(provider: &dyn MarketData, symbol: &str) -> Result<Option<f64>> {
    let bars = provider.latest_day(symbol).await?;
    if let Some(last) = bars.last() {
        return Ok(Some(last.close));
    }
    provider.market_price(symbol).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarketError;
    use crate::provider::{MockMarketData, bar};

    #[tokio::test]
    async fn test_price_from_last_close() {
        let mut provider = MockMarketData::new();
        provider
            .expect_latest_day()
            .returning(|_| Ok(vec![bar(1, 101.5), bar(0, 123.456)]));

        let resolution = resolve_price(&provider, "AAPL").await;
        assert_eq!(resolution, PriceResolution::Price(123.456));
        assert_eq!(resolution.price(), Some(123.456));
    }

    #[tokio::test]
    async fn test_fallback_to_market_price() {
        let mut provider = MockMarketData::new();
        provider.expect_latest_day().returning(|_| Ok(Vec::new()));
        provider
            .expect_market_price()
            .returning(|_| Ok(Some(55.25)));

        let resolution = resolve_price(&provider, "NEWCO").await;
        assert_eq!(resolution, PriceResolution::Price(55.25));
    }

    #[tokio::test]
    async fn test_no_data_sentence() {
        let mut provider = MockMarketData::new();
        provider.expect_latest_day().returning(|_| Ok(Vec::new()));
        provider.expect_market_price().returning(|_| Ok(None));

        let resolution = resolve_price(&provider, "GONE").await;
        assert_eq!(
            resolution,
            PriceResolution::Unavailable("No price data available for GONE".to_string())
        );
        assert_eq!(resolution.price(), None);
    }

    #[tokio::test]
    async fn test_provider_failure_sentence() {
        let mut provider = MockMarketData::new();
        provider
            .expect_latest_day()
            .returning(|_| Err(MarketError::Yahoo("connect timed out".to_string())));

        let resolution = resolve_price(&provider, "AAPL").await;
        match resolution {
            PriceResolution::Failed(msg) => {
                assert_eq!(
                    msg,
                    "Error fetching stock price for AAPL: Yahoo Finance error: connect timed out"
                );
            }
            other => panic!("Expected Failed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fallback_failure_sentence() {
        let mut provider = MockMarketData::new();
        provider.expect_latest_day().returning(|_| Ok(Vec::new()));
        provider.expect_market_price().returning(|_| {
            Err(MarketError::Malformed {
                symbol: "AAPL".to_string(),
                reason: "missing chart meta".to_string(),
            })
        });

        let resolution = resolve_price(&provider, "AAPL").await;
        assert!(matches!(resolution, PriceResolution::Failed(_)));
    }

    #[test]
    fn test_into_value() {
        assert_eq!(PriceResolution::Price(10.0).into_value(), json!(10.0));
        assert_eq!(
            PriceResolution::Unavailable("no data".to_string()).into_value(),
            Value::String("no data".to_string())
        );
    }
}
