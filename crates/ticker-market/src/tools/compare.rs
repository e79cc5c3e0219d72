//! Tool comparing the prices of two symbols

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use ticker_core::{Error, Result, Tool};

use super::checked_symbol;
use crate::compare::compare_prices;
use crate::provider::MarketData;

/// Tool producing a ranked comparison sentence for two symbols
pub struct CompareStocksTool {
    provider: Arc<dyn MarketData>,
}

#[derive(Debug, Deserialize)]
struct CompareParams {
    symbol1: String,
    symbol2: String,
}

impl CompareStocksTool {
    /// Create a new comparison tool
    pub fn new(provider: Arc<dyn MarketData>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for CompareStocksTool {
    async fn execute(&self, params: Value) -> Result<Value> {
        let params: CompareParams = serde_json::from_value(params)
            .map_err(|e| Error::InvalidParams(e.to_string()))?;
        let symbol1 = checked_symbol(&params.symbol1, "symbol1")?;
        let symbol2 = checked_symbol(&params.symbol2, "symbol2")?;

        let sentence = compare_prices(self.provider.as_ref(), &symbol1, &symbol2).await;
        Ok(Value::String(sentence))
    }

    fn name(&self) -> &str {
        "compare_stocks"
    }

    fn description(&self) -> &str {
        "Compare the current stock prices of two ticker symbols. Returns a \
         formatted message comparing the two stock prices."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "symbol1": {
                    "type": "string",
                    "description": "The first stock ticker symbol"
                },
                "symbol2": {
                    "type": "string",
                    "description": "The second stock ticker symbol"
                }
            },
            "required": ["symbol1", "symbol2"]
        })
    }
}
