//! Tool for historical price data

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use ticker_core::{Error, Result, Tool};

use super::checked_symbol;
use crate::history::{DEFAULT_PERIOD, history_csv};
use crate::provider::MarketData;

/// Tool exporting OHLCV history as CSV text
pub struct PriceHistoryTool {
    provider: Arc<dyn MarketData>,
}

#[derive(Debug, Deserialize)]
struct HistoryParams {
    symbol: String,
    #[serde(default = "default_period")]
    period: String,
}

fn default_period() -> String {
    DEFAULT_PERIOD.to_string()
}

impl PriceHistoryTool {
    /// Create a new price history tool
    pub fn new(provider: Arc<dyn MarketData>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for PriceHistoryTool {
    async fn execute(&self, params: Value) -> Result<Value> {
        let params: HistoryParams = serde_json::from_value(params)
            .map_err(|e| Error::InvalidParams(e.to_string()))?;
        let symbol = checked_symbol(&params.symbol, "symbol")?;

        let csv = history_csv(self.provider.as_ref(), &symbol, &params.period).await;
        Ok(Value::String(csv))
    }

    fn name(&self) -> &str {
        "get_stock_price_history"
    }

    fn description(&self) -> &str {
        "Retrieve historical data for a stock given a ticker symbol and a \
         period (e.g. '1mo', '3mo', '1y'). Returns the historical data as a \
         CSV formatted string."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "symbol": {
                    "type": "string",
                    "description": "Stock ticker symbol"
                },
                "period": {
                    "type": "string",
                    "description": "Period over which to retrieve history (e.g. '1mo', '3mo', '1y')",
                    "default": DEFAULT_PERIOD
                }
            },
            "required": ["symbol"]
        })
    }
}
