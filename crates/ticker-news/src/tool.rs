//! Tool exposing the news search

use crate::client::NewsClient;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use ticker_core::{Error, Result, Tool};
use tracing::error;

/// Tool fetching recent news articles for a free-text query
///
/// The payload is either the provider's response body verbatim or JSON
/// `null`; both failure classes are logged here and collapsed to `null`
/// so the host never sees a fault.
pub struct GetArticlesTool {
    client: NewsClient,
}

#[derive(Debug, Deserialize)]
struct ArticlesParams {
    query: String,
}

impl GetArticlesTool {
    /// Create a new articles tool over a configured client
    pub fn new(client: NewsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for GetArticlesTool {
    async fn execute(&self, params: Value) -> Result<Value> {
        let params: ArticlesParams = serde_json::from_value(params)
            .map_err(|e| Error::InvalidParams(e.to_string()))?;

        match self.client.search(&params.query).await {
            Ok(body) => Ok(Value::String(body)),
            Err(err) => {
                error!("{err}");
                Ok(Value::Null)
            }
        }
    }

    fn name(&self) -> &str {
        "get_articles"
    }

    fn description(&self) -> &str {
        "Get the latest news articles for the given query. Returns the raw \
         search response from the news provider, or null when the lookup \
         fails."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The query to search for articles"
                }
            },
            "required": ["query"]
        })
    }
}
