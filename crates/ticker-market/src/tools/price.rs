//! Tool for the current stock price

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use ticker_core::{Error, Result, Tool};

use super::checked_symbol;
use crate::price::resolve_price;
use crate::provider::MarketData;

/// Tool resolving a ticker symbol to its current price
pub struct StockPriceTool {
    provider: Arc<dyn MarketData>,
}

#[derive(Debug, Deserialize)]
struct PriceParams {
    symbol: String,
}

impl StockPriceTool {
    /// Create a new stock price tool
    pub fn new(provider: Arc<dyn MarketData>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for StockPriceTool {
    async fn execute(&self, params: Value) -> Result<Value> {
        let params: PriceParams = serde_json::from_value(params)
            .map_err(|e| Error::InvalidParams(e.to_string()))?;
        let symbol = checked_symbol(&params.symbol, "symbol")?;

        // Lookup failures stay inside the payload, per the host contract.
        Ok(resolve_price(self.provider.as_ref(), &symbol)
            .await
            .into_value())
    }

    fn name(&self) -> &str {
        "get_stock_price"
    }

    fn description(&self) -> &str {
        "Retrieve the current stock price for the given ticker symbol. \
         Returns the latest closing price as a number, or a descriptive \
         message when no data is available."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "symbol": {
                    "type": "string",
                    "description": "Stock ticker symbol"
                }
            },
            "required": ["symbol"]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{MockMarketData, bar};

    #[tokio::test]
    async fn test_numeric_payload() {
        let mut provider = MockMarketData::new();
        provider
            .expect_latest_day()
            .returning(|_| Ok(vec![bar(0, 99.5)]));

        let tool = StockPriceTool::new(Arc::new(provider));
        let result = tool.execute(json!({ "symbol": "AAPL" })).await.unwrap();
        assert_eq!(result, json!(99.5));
    }

    #[tokio::test]
    async fn test_no_data_payload_is_string() {
        let mut provider = MockMarketData::new();
        provider.expect_latest_day().returning(|_| Ok(Vec::new()));
        provider.expect_market_price().returning(|_| Ok(None));

        let tool = StockPriceTool::new(Arc::new(provider));
        let result = tool.execute(json!({ "symbol": "GONE" })).await.unwrap();
        assert_eq!(result, json!("No price data available for GONE"));
    }

    #[tokio::test]
    async fn test_rejects_missing_symbol() {
        let tool = StockPriceTool::new(Arc::new(MockMarketData::new()));
        let err = tool.execute(json!({})).await.unwrap_err();
        assert!(matches!(err, Error::InvalidParams(_)));
    }

    #[test]
    fn test_metadata() {
        let tool = StockPriceTool::new(Arc::new(MockMarketData::new()));
        assert_eq!(tool.name(), "get_stock_price");
        assert_eq!(tool.input_schema()["required"], json!(["symbol"]));
    }
}
