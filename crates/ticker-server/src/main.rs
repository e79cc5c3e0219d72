//! Stock price & news MCP server
//!
//! Exposes equity prices, price history, a two-symbol comparison, and a
//! news search as MCP tools over stdio, plus the `stock://{symbol}`
//! resource.

mod logging;
mod protocol;
mod server;

use std::sync::Arc;
use ticker_core::ToolRegistry;
use ticker_market::tools::{CompareStocksTool, PriceHistoryTool, StockPriceTool};
use ticker_market::{MarketData, StockResource, YahooMarketData};
use ticker_news::{GetArticlesTool, NewsClient, NewsConfig};
use tracing::info;

use crate::server::McpServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init_tracing();

    // Missing news credentials abort here, before the server starts
    // serving, rather than on the first get_articles call.
    let news_config = NewsConfig::from_env()?;

    let market: Arc<dyn MarketData> = Arc::new(YahooMarketData::new());

    let registry = Arc::new(ToolRegistry::new());
    registry.register(Arc::new(StockPriceTool::new(Arc::clone(&market))));
    registry.register(Arc::new(PriceHistoryTool::new(Arc::clone(&market))));
    registry.register(Arc::new(CompareStocksTool::new(Arc::clone(&market))));
    registry.register(Arc::new(GetArticlesTool::new(NewsClient::new(news_config))));

    info!("Serving {} tools over stdio", registry.len());
    McpServer::new(registry, StockResource::new(market)).run().await
}
